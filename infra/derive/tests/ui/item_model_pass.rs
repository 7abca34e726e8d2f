use georeg_derive::item_model;

#[item_model]
pub struct Sample {
    pub display_name: String,
    pub item_count: u32,
}

impl Default for Sample {
    fn default() -> Self {
        Self { display_name: "unnamed".to_owned(), item_count: 1 }
    }
}

#[item_model(default = false)]
#[derive(Eq, Hash)]
pub struct Strict {
    #[serde(rename = "itemID")]
    pub item_id: String,
}

fn main() {
    let sample = Sample::default();
    let _ = sample.clone() == sample;
    let _ = Strict { item_id: "x".to_owned() };
}
