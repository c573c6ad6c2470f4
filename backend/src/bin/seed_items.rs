//! Populate the item collection with synthetic listings.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io;
use std::sync::Arc;

use clap::Parser;
use example_items::{DEFAULT_ITEM_COUNT, ExampleItemSeed, generate_example_items, random_seed};
use mockable::DefaultClock;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use listings_backend::domain::ports::ItemsCommand;
use listings_backend::domain::{ItemDraft, ItemValidationError, ItemsService, NewItem};
use listings_backend::outbound::persistence::{MongoItemRepository, StoreConfig, connect};
use listings_backend::settings::{DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_MONGODB_URI};

/// `seed-items` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-items",
    about = "Insert synthetic item listings into the item store",
    version
)]
struct CliArgs {
    /// MongoDB connection string. Falls back to `LISTINGS_MONGODB_URI`.
    #[arg(long = "mongodb-uri", value_name = "uri")]
    mongodb_uri: Option<String>,
    /// Database name. Falls back to `LISTINGS_DATABASE`.
    #[arg(long, value_name = "name")]
    database: Option<String>,
    /// Collection name. Falls back to `LISTINGS_COLLECTION`.
    #[arg(long, value_name = "name")]
    collection: Option<String>,
    /// Number of items to generate.
    #[arg(long, default_value_t = DEFAULT_ITEM_COUNT)]
    count: usize,
    /// RNG seed; the same seed reproduces the same items.
    #[arg(long)]
    seed: Option<u64>,
}

/// Totals reported once seeding finishes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SeedSummary {
    inserted: usize,
    failed: usize,
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let seed = args.seed.unwrap_or_else(random_seed);
    let seeds = generate_example_items(seed, args.count)
        .map_err(|error| io::Error::other(format!("generate items: {error}")))?;

    let store_config = StoreConfig::new(
        resolve(args.mongodb_uri, "LISTINGS_MONGODB_URI", DEFAULT_MONGODB_URI),
        resolve(args.database, "LISTINGS_DATABASE", DEFAULT_DATABASE),
        resolve(args.collection, "LISTINGS_COLLECTION", DEFAULT_COLLECTION),
    );
    let collection = connect(&store_config)
        .await
        .map_err(|error| io::Error::other(format!("connect item store: {error}")))?;
    let command = ItemsService::new(
        Arc::new(MongoItemRepository::new(collection)),
        Arc::new(DefaultClock),
    );

    info!(seed, count = seeds.len(), "seeding items");
    let summary = insert_all(&command, seeds).await;
    info!(
        seed,
        inserted = summary.inserted,
        failed = summary.failed,
        database = store_config.database(),
        collection = store_config.collection(),
        "seeding finished"
    );
    println!("inserted={} failed={} seed={seed}", summary.inserted, summary.failed);
    Ok(())
}

/// Insert each item in turn; failures are logged and counted, never fatal.
async fn insert_all<C>(command: &C, seeds: Vec<ExampleItemSeed>) -> SeedSummary
where
    C: ItemsCommand + ?Sized,
{
    let mut summary = SeedSummary::default();
    for seed in seeds {
        let id = seed.id;
        let result = match new_item(seed) {
            Ok(item) => command.create(item).await.map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };
        match result {
            Ok(()) => summary.inserted += 1,
            Err(error) => {
                warn!(item_id = %id, %error, "failed to insert seeded item");
                summary.failed += 1;
            }
        }
    }
    summary
}

fn new_item(seed: ExampleItemSeed) -> Result<NewItem, ItemValidationError> {
    let ExampleItemSeed {
        id,
        title,
        description,
        location,
        city,
        phone_number,
        user_name,
        user_id,
    } = seed;
    NewItem::try_from_parts(
        Some(id.to_string()),
        ItemDraft {
            title: Some(title),
            description: Some(description),
            location: Some(location),
            city: Some(city),
            phone_number: Some(phone_number),
            user_name: Some(user_name),
            user_id: Some(user_id),
        },
    )
}

fn resolve(flag: Option<String>, var: &str, default: &str) -> String {
    flag.or_else(|| env::var(var).ok().filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use env_lock::lock_env;
    use listings_backend::domain::{Error, ItemChanges, ItemId};
    use std::sync::Mutex;

    /// Command double rejecting every second insert as a duplicate.
    #[derive(Default)]
    struct FlakyCommand {
        calls: Mutex<usize>,
    }

    #[async_trait]
    impl ItemsCommand for FlakyCommand {
        async fn create(&self, _item: NewItem) -> Result<(), Error> {
            let mut calls = self.calls.lock().expect("calls lock");
            *calls += 1;
            if *calls % 2 == 0 {
                return Err(Error::duplicate_id());
            }
            Ok(())
        }

        async fn update(&self, _id: ItemId, _changes: ItemChanges) -> Result<(), Error> {
            Ok(())
        }

        async fn delete(&self, _id: ItemId) -> Result<(), Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn failures_are_counted_not_fatal() {
        let seeds = generate_example_items(7, 5).expect("generate seeds");
        let summary = insert_all(&FlakyCommand::default(), seeds).await;
        assert_eq!(
            summary,
            SeedSummary {
                inserted: 3,
                failed: 2
            }
        );
    }

    #[test]
    fn generated_seeds_pass_validation() {
        for seed in generate_example_items(11, 20).expect("generate seeds") {
            let expected = seed.id.to_string();
            let item = new_item(seed).expect("seed is a valid item");
            assert_eq!(item.id.as_ref(), expected);
        }
    }

    #[test]
    fn resolve_prefers_flag_then_environment() {
        let _guard = lock_env([("LISTINGS_DATABASE", Some("fromEnv".to_owned()))]);
        assert_eq!(
            resolve(Some("fromFlag".into()), "LISTINGS_DATABASE", DEFAULT_DATABASE),
            "fromFlag"
        );
        assert_eq!(resolve(None, "LISTINGS_DATABASE", DEFAULT_DATABASE), "fromEnv");
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let _guard = lock_env([("LISTINGS_COLLECTION", None::<String>)]);
        assert_eq!(
            resolve(None, "LISTINGS_COLLECTION", DEFAULT_COLLECTION),
            "items"
        );
    }

    #[test]
    fn cli_parses_all_flags() {
        let args = CliArgs::try_parse_from([
            "seed-items",
            "--mongodb-uri",
            "mongodb://db:27017",
            "--database",
            "classifieds",
            "--collection",
            "listings",
            "--count",
            "5",
            "--seed",
            "42",
        ])
        .expect("valid arguments");
        assert_eq!(args.count, 5);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.mongodb_uri.as_deref(), Some("mongodb://db:27017"));
    }
}
