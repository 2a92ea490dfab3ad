//! End-to-end behaviour of the listing store and admin flag over both substrates

use imobiliaria_leon::listings::{add_photo, remove_photo, IdGenerator};
use imobiliaria_leon::storage::{ADMIN_KEY, PROPERTIES_KEY};
use imobiliaria_leon::{
    AdminSession, FileStore, KeyValueStore, MemoryStore, NewProperty, PropertyStore, PropertyType,
    PropertyUpdate,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

fn listing(nome: &str, preco: f64) -> NewProperty {
    NewProperty {
        nome: nome.to_string(),
        tipo: PropertyType::Casa,
        preco,
        localizacao: "Centro, São Paulo - SP".to_string(),
        imagem_principal: format!("https://exemplo.com/{}.jpg", nome.to_lowercase()),
        descricao: "Casa com quintal".to_string(),
    }
}

#[test]
fn test_round_trip_seeds_gallery() {
    let store = PropertyStore::new(MemoryStore::new());
    let input = listing("A", 100.0);
    let created = store.create(input.clone()).unwrap();

    let all = store.list().unwrap();
    assert_eq!(all.len(), 1);
    let stored = &all[0];
    assert_eq!(stored.id, created.id);
    assert_eq!(stored.nome, input.nome);
    assert_eq!(stored.tipo, input.tipo);
    assert_eq!(stored.preco, input.preco);
    assert_eq!(stored.localizacao, input.localizacao);
    assert_eq!(stored.descricao, input.descricao);
    assert_eq!(stored.galeria, vec![input.imagem_principal]);
}

#[test]
fn test_rapid_creation_gives_unique_ids() {
    let store = PropertyStore::new(MemoryStore::new());
    let mut ids: Vec<String> = (0..50)
        .map(|i| store.create(listing(&format!("P{}", i), 1.0)).unwrap().id)
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[test]
fn test_update_merge_and_unknown_ids() {
    let store = PropertyStore::new(MemoryStore::new());
    let created = store.create(listing("A", 100.0)).unwrap();

    store
        .update(
            &created.id,
            PropertyUpdate {
                preco: Some(200.0),
                ..Default::default()
            },
        )
        .unwrap();
    let updated = store.get_by_id(&created.id).unwrap().unwrap();
    assert_eq!(updated.preco, 200.0);
    assert_eq!(updated.nome, "A");

    let snapshot = store.list().unwrap();
    store
        .update("nonexistent", PropertyUpdate::galeria(vec![]))
        .unwrap();
    store.delete("nonexistent").unwrap();
    assert_eq!(store.list().unwrap(), snapshot);
}

#[test]
fn test_gallery_growth_and_shrink_through_store() {
    let store = PropertyStore::with_ids(MemoryStore::new(), IdGenerator::with_clock(|| 1));
    let created = store
        .create(NewProperty {
            imagem_principal: "url0".to_string(),
            ..listing("A", 1.0)
        })
        .unwrap();

    add_photo(&store, &created.id, "url1").unwrap();
    assert_eq!(
        store.get_by_id(&created.id).unwrap().unwrap().galeria,
        vec!["url0", "url1"]
    );

    // The store itself does not guard the primary image
    store
        .update(&created.id, PropertyUpdate::galeria(vec!["url1".to_string()]))
        .unwrap();
    let stored = store.get_by_id(&created.id).unwrap().unwrap();
    assert_eq!(stored.galeria, vec!["url1"]);
    assert_eq!(stored.imagem_principal, "url0");

    assert!(remove_photo(&store, &created.id, "url0").is_err());
}

#[test]
fn test_persisted_layout() {
    let storage = MemoryStore::new();
    let store = PropertyStore::new(&storage);
    let admin = AdminSession::new(&storage);

    store.create(listing("A", 1.0)).unwrap();
    assert!(admin.login("admin123").unwrap());

    let raw = storage.get(PROPERTIES_KEY).unwrap().unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();
    let record = value.as_array().unwrap()[0].as_object().unwrap();
    let mut keys: Vec<_> = record.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "descricao",
            "galeria",
            "id",
            "imagemPrincipal",
            "localizacao",
            "nome",
            "preco",
            "tipo"
        ]
    );
    assert_eq!(storage.get(ADMIN_KEY).unwrap().as_deref(), Some("true"));

    admin.logout().unwrap();
    assert_eq!(storage.get(ADMIN_KEY).unwrap(), None);
}

#[test]
fn test_file_store_persists_across_handles() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("imobiliaria_leon.json");

    let created = PropertyStore::new(FileStore::new(&path))
        .create(listing("A", 100.0))
        .unwrap();
    assert!(AdminSession::new(FileStore::new(&path)).login("admin123").unwrap());

    let reopened = PropertyStore::new(FileStore::new(&path));
    assert_eq!(reopened.list().unwrap(), vec![created.clone()]);
    assert!(AdminSession::new(FileStore::new(&path)).is_admin().unwrap());

    reopened.delete(&created.id).unwrap();
    assert!(PropertyStore::new(FileStore::new(&path)).list().unwrap().is_empty());
}

#[test]
fn test_malformed_collection_is_surfaced() {
    let storage = MemoryStore::with_entries([(PROPERTIES_KEY, r#"[{"id": 1}]"#)]);
    let store = PropertyStore::new(&storage);

    assert!(store.list().is_err());
    assert!(store.get_by_id("1").is_err());
    assert!(store.delete("1").is_err());
    assert_eq!(
        storage.get(PROPERTIES_KEY).unwrap().as_deref(),
        Some(r#"[{"id": 1}]"#)
    );
}
