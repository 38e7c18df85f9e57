//! Static product, color, and model catalog.
//!
//! This is plain selection data handed to the prompt builder and the CLI;
//! nothing here is mutated at runtime.

/// A selectable product color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// A product the logo can be composited onto.
#[derive(Debug, Clone, Copy)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    /// Stock reference photo used when the user doesn't supply one
    pub image_url: &'static str,
    pub colors: &'static [ProductColor],
}

impl Product {
    /// First catalog color, if the product has a color range.
    pub fn default_color(&self) -> Option<&'static ProductColor> {
        self.colors.first()
    }

    /// Find a color by name (case-insensitive).
    pub fn color(&self, name: &str) -> Option<&'static ProductColor> {
        self.colors.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// A stock model photo the product can be worn by.
#[derive(Debug, Clone, Copy)]
pub struct Model {
    pub id: &'static str,
    pub name: &'static str,
    pub image_url: &'static str,
}

const T_SHIRT_COLORS: &[ProductColor] = &[
    ProductColor { name: "White", hex: "#FFFFFF" },
    ProductColor { name: "Black", hex: "#000000" },
    ProductColor { name: "Gray", hex: "#808080" },
    ProductColor { name: "Brown", hex: "#A52A2A" },
    ProductColor { name: "Red", hex: "#FF0000" },
    ProductColor { name: "Orange", hex: "#FFA500" },
    ProductColor { name: "Yellow", hex: "#FFFF00" },
    ProductColor { name: "Green", hex: "#008000" },
    ProductColor { name: "Teal", hex: "#008080" },
    ProductColor { name: "Blue", hex: "#0000FF" },
    ProductColor { name: "Purple", hex: "#800080" },
    ProductColor { name: "Pink", hex: "#FFC0CB" },
];

/// All products, in display order.
pub const PRODUCTS: &[Product] = &[
    Product { id: "tshirt", name: "T-Shirt", image_url: "https://picsum.photos/id/237/800/800", colors: T_SHIRT_COLORS },
    Product { id: "mug", name: "Coffee Mug", image_url: "https://picsum.photos/id/30/800/800", colors: &[] },
    Product { id: "tote-bag", name: "Tote Bag", image_url: "https://picsum.photos/id/119/800/800", colors: &[] },
    Product { id: "hoodie", name: "Hoodie", image_url: "https://picsum.photos/id/10/800/800", colors: &[] },
    Product { id: "hat", name: "Hat", image_url: "https://picsum.photos/id/1015/800/800", colors: &[] },
    Product { id: "sticker", name: "Sticker", image_url: "https://picsum.photos/id/56/800/800", colors: &[] },
    Product { id: "phone-case", name: "Phone Case", image_url: "https://picsum.photos/id/160/800/800", colors: &[] },
    Product { id: "backpack", name: "Backpack", image_url: "https://picsum.photos/id/1020/800/800", colors: &[] },
    Product { id: "beanie", name: "Beanie", image_url: "https://picsum.photos/id/674/800/800", colors: &[] },
    Product { id: "socks", name: "Socks", image_url: "https://picsum.photos/id/225/800/800", colors: &[] },
    Product { id: "baseball-cap", name: "Baseball Cap", image_url: "https://picsum.photos/id/1016/800/800", colors: &[] },
    Product { id: "poster", name: "Poster", image_url: "https://picsum.photos/id/1019/800/800", colors: &[] },
    Product { id: "car-wrap", name: "Car Wrap", image_url: "https://picsum.photos/id/1071/800/800", colors: &[] },
    Product { id: "truck-decal", name: "Truck Decal", image_url: "https://picsum.photos/id/1073/800/800", colors: &[] },
    Product { id: "water-bottle", name: "Water Bottle", image_url: "https://picsum.photos/id/1025/800/800", colors: &[] },
    Product { id: "pillow", name: "Pillow", image_url: "https://picsum.photos/id/1067/800/800", colors: &[] },
];

/// Stock model photos, in display order.
pub const MODELS: &[Model] = &[
    Model { id: "model-1", name: "Model 1", image_url: "https://images.unsplash.com/photo-1531123414780-f74242c2b052?w=800&h=800&fit=crop&q=80" },
    Model { id: "model-2", name: "Model 2", image_url: "https://images.unsplash.com/photo-1596495578065-640866d092da?w=800&h=800&fit=crop&q=80" },
    Model { id: "model-3", name: "Model 3", image_url: "https://images.unsplash.com/photo-1508214751196-bcfd4ca60f91?w=800&h=800&fit=crop&q=80" },
    Model { id: "model-4", name: "Model 4", image_url: "https://images.unsplash.com/photo-1617056413253-c97db1573392?w=800&h=800&fit=crop&q=80" },
    Model { id: "model-5", name: "Model 5", image_url: "https://images.unsplash.com/photo-1581403341630-a6e0b8d8d49a?w=800&h=800&fit=crop&q=80" },
    Model { id: "model-6", name: "Model 6", image_url: "https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=800&h=800&fit=crop&q=80" },
    Model { id: "model-7", name: "Model 7", image_url: "https://images.unsplash.com/photo-1554151228-14d9def656e4?w=800&h=800&fit=crop&q=80" },
    Model { id: "model-8", name: "Model 8", image_url: "https://images.unsplash.com/photo-1560250097-4b9b655ae0b1?w=800&h=800&fit=crop&q=80" },
];

/// Canned placement instructions offered before free-form entry.
pub const PLACEMENT_PROMPTS: &[&str] = &[
    "Place the logo on the center of the t-shirt, making it look like a high-quality print.",
    "Place the logo on the left chest of the t-shirt, giving it a subtle, embroidered look.",
    "Place the logo prominently on the front of the coffee mug, making it appear like a high-quality decal.",
    "Integrate the logo subtly into the design of the tote bag, as if it's part of the fabric pattern.",
    "Position the logo on the back of the hoodie, large and centered, with a distressed print effect.",
    "Create a realistic vinyl sticker of the logo, placed on a clean surface.",
    "Apply the logo as a full wrap design on a water bottle, with reflections consistent with the material.",
];

/// Look up a product by id.
pub fn product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Look up a model by id.
pub fn model(id: &str) -> Option<&'static Model> {
    MODELS.iter().find(|m| m.id == id)
}
