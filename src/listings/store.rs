use crate::listings::ids::IdGenerator;
use crate::models::{NewProperty, Property, PropertyUpdate};
use crate::storage::{KeyValueStore, PROPERTIES_KEY};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// CRUD over the property collection.
///
/// The whole collection lives as one JSON array under [`PROPERTIES_KEY`];
/// every mutation reads it, changes it in memory and writes it back whole.
/// Unknown ids on update/delete are silent no-ops.
#[derive(Debug)]
pub struct PropertyStore<S> {
    storage: S,
    ids: IdGenerator,
}

impl<S: KeyValueStore> PropertyStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_ids(storage, IdGenerator::new())
    }

    pub fn with_ids(storage: S, ids: IdGenerator) -> Self {
        Self { storage, ids }
    }

    /// All listings in insertion order
    pub fn list(&self) -> Result<Vec<Property>> {
        match self.storage.get(PROPERTIES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).with_context(|| {
                format!("Malformed property collection under '{}'", PROPERTIES_KEY)
            }),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, properties: &[Property]) -> Result<()> {
        let json = serde_json::to_string(properties)?;
        self.storage.set(PROPERTIES_KEY, &json)?;
        debug!("Persisted {} properties", properties.len());
        Ok(())
    }

    pub fn create(&self, new: NewProperty) -> Result<Property> {
        let mut properties = self.list()?;
        let id = self.ids.next_id(&properties)?;
        let property = Property::from_new(id, new);

        properties.push(property.clone());
        self.save(&properties)?;

        info!("Created property {} ({})", property.id, property.nome);
        Ok(property)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Property>> {
        Ok(self.list()?.into_iter().find(|p| p.id == id))
    }

    pub fn update(&self, id: &str, update: PropertyUpdate) -> Result<()> {
        let mut properties = self.list()?;
        match properties.iter_mut().find(|p| p.id == id) {
            Some(property) => {
                property.apply(update);
                self.save(&properties)?;
                info!("Updated property {}", id);
            }
            None => debug!("Update skipped, no property with id {}", id),
        }
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let mut properties = self.list()?;
        let before = properties.len();
        properties.retain(|p| p.id != id);

        if properties.len() < before {
            info!("Deleted property {}", id);
        } else {
            debug!("Delete found no property with id {}", id);
        }
        self.save(&properties)
    }
}
