use serde::Deserialize;

/// Just the `name` field every managed JSON object carries.
#[derive(Clone, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &String {
        &self.name
    }
}
