use pharmacy_directory_domain::{Entity, ID};
use std::sync::Mutex;

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) -> anyhow::Result<()> {
    let mut collection = collection.lock().unwrap();
    if collection.iter().any(|item| item.id() == val.id()) {
        return Err(anyhow::anyhow!("Entity with id: {} already exists", val.id()));
    }
    collection.push(val.clone());
    Ok(())
}

pub fn save<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) -> anyhow::Result<()> {
    let mut collection = collection.lock().unwrap();
    match collection.iter_mut().find(|item| item.id() == val.id()) {
        Some(item) => {
            *item = val.clone();
            Ok(())
        }
        None => Err(anyhow::anyhow!("Entity with id: {} was not found", val.id())),
    }
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|item| item.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = collection.lock().unwrap();
    collection
        .iter()
        .filter(|item| compare(*item))
        .cloned()
        .collect()
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let index = collection.iter().position(|item| item.id() == val_id)?;
    Some(collection.remove(index))
}
