use crate::listings::forms::FormError;
use crate::listings::store::PropertyStore;
use crate::models::PropertyUpdate;
use crate::storage::KeyValueStore;
use anyhow::Result;
use tracing::info;

/// Append `url` to a listing's gallery.
///
/// Returns the new gallery, or `None` when the url is blank or no listing
/// has that id.
pub fn add_photo<S: KeyValueStore>(
    store: &PropertyStore<S>,
    id: &str,
    url: &str,
) -> Result<Option<Vec<String>>> {
    let url = url.trim();
    if url.is_empty() {
        return Ok(None);
    }

    let Some(property) = store.get_by_id(id)? else {
        return Ok(None);
    };

    let mut galeria = property.galeria;
    galeria.push(url.to_string());
    store.update(id, PropertyUpdate::galeria(galeria.clone()))?;

    info!("Added photo to property {} ({} photos)", id, galeria.len());
    Ok(Some(galeria))
}

/// Remove every occurrence of `url` from a listing's gallery.
///
/// The primary image is refused. Returns the new gallery, or `None` when no
/// listing has that id.
pub fn remove_photo<S: KeyValueStore>(
    store: &PropertyStore<S>,
    id: &str,
    url: &str,
) -> Result<Option<Vec<String>>> {
    let Some(property) = store.get_by_id(id)? else {
        return Ok(None);
    };

    if property.imagem_principal == url {
        return Err(FormError::PrimaryImage.into());
    }

    let galeria: Vec<String> = property
        .galeria
        .into_iter()
        .filter(|img| img != url)
        .collect();
    store.update(id, PropertyUpdate::galeria(galeria.clone()))?;

    info!("Removed photo from property {} ({} photos)", id, galeria.len());
    Ok(Some(galeria))
}
