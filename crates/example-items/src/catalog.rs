//! Word lists used to compose product-like listing titles.

pub(crate) const ADJECTIVES: &[&str] = &[
    "Handcrafted",
    "Rustic",
    "Sleek",
    "Ergonomic",
    "Practical",
    "Refined",
    "Vintage",
    "Compact",
    "Gorgeous",
    "Sturdy",
];

pub(crate) const MATERIALS: &[&str] = &[
    "Oak", "Steel", "Cotton", "Granite", "Leather", "Bamboo", "Rubber", "Wooden", "Plastic",
    "Bronze",
];

pub(crate) const PRODUCTS: &[&str] = &[
    "Chair", "Table", "Lamp", "Bicycle", "Keyboard", "Jacket", "Sofa", "Kettle", "Guitar",
    "Bookshelf", "Stroller", "Desk",
];
