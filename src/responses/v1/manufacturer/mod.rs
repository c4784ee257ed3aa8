use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Manufacturer {
    pub id: i32,
    pub name: String,
    pub country: String,
}
