//! Ordered, name-deduplicated material collection

use std::collections::{HashMap, TryReserveError};
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::material::Material;
use super::tokenizer::copy_token;

/// Loading a serialized library failed
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// Two materials share a name
    #[error("duplicate material name '{0}'")]
    DuplicateName(String),
}

/// Materials parsed from one MTL document
///
/// Keeps declaration order and guarantees that no two materials share a name. Serializes as
/// the plain material list; the name index is rebuilt on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Material>", try_from = "Vec<Material>")]
pub struct MaterialLibrary {
    /// Materials in declaration order
    materials: Vec<Material>,
    /// Name -> position in `materials`
    index: HashMap<String, usize>,
}

impl MaterialLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the library holds no materials
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Position of the material called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Material called `name` (exact, case-sensitive match)
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.index_of(name).and_then(|index| self.materials.get(index))
    }

    /// Mutable access to the material called `name`
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Material> {
        let index = self.index_of(name)?;
        self.materials.get_mut(index)
    }

    /// Material at `index` in declaration order
    pub fn get_index(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    /// Mutable access to the material at `index`
    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut Material> {
        self.materials.get_mut(index)
    }

    /// All materials in declaration order
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Iterate materials in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Material> {
        self.materials.iter()
    }

    /// Material names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.materials.iter().map(|material| material.name.as_str())
    }

    /// Return the index of the material called `name`, creating it if needed
    ///
    /// The name is copied; the caller's buffer can be dropped afterwards.
    pub fn add_material(&mut self, name: &str) -> Result<usize, TryReserveError> {
        if let Some(index) = self.index_of(name) {
            log::trace!("Reusing material '{}' at index {}", name, index);
            return Ok(index);
        }

        self.materials.try_reserve(1)?;
        self.index.try_reserve(1)?;
        let key = copy_token(name)?;
        let material = Material::new(copy_token(name)?);

        let index = self.materials.len();
        self.materials.push(material);
        self.index.insert(key, index);

        log::debug!("Declared material '{}' at index {}", name, index);
        Ok(index)
    }
}

impl Index<usize> for MaterialLibrary {
    type Output = Material;

    fn index(&self, index: usize) -> &Material {
        &self.materials[index]
    }
}

impl TryFrom<Vec<Material>> for MaterialLibrary {
    type Error = LibraryError;

    fn try_from(materials: Vec<Material>) -> Result<Self, LibraryError> {
        let mut index = HashMap::with_capacity(materials.len());
        for (position, material) in materials.iter().enumerate() {
            if index.insert(material.name.clone(), position).is_some() {
                return Err(LibraryError::DuplicateName(material.name.clone()));
            }
        }
        Ok(Self { materials, index })
    }
}

impl From<MaterialLibrary> for Vec<Material> {
    fn from(library: MaterialLibrary) -> Self {
        library.materials
    }
}

impl<'a> IntoIterator for &'a MaterialLibrary {
    type Item = &'a Material;
    type IntoIter = std::slice::Iter<'a, Material>;

    fn into_iter(self) -> Self::IntoIter {
        self.materials.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_material_preserves_order() {
        let mut library = MaterialLibrary::new();
        assert_eq!(library.add_material("Brass").unwrap(), 0);
        assert_eq!(library.add_material("Chrome").unwrap(), 1);

        let names: Vec<_> = library.names().collect();
        assert_eq!(names, vec!["Brass", "Chrome"]);
        assert_eq!(library[1].name, "Chrome");
    }

    #[test]
    fn test_add_material_deduplicates() {
        let mut library = MaterialLibrary::new();
        library.add_material("Brass").unwrap();
        library.add_material("Chrome").unwrap();
        assert_eq!(library.add_material("Brass").unwrap(), 0);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut library = MaterialLibrary::new();
        library.add_material("Brass").unwrap();
        assert!(library.get("Brass").is_some());
        assert!(library.get("brass").is_none());
        assert_eq!(library.add_material("brass").unwrap(), 1);
    }

    #[test]
    fn test_lookup_by_index_and_name() {
        let mut library = MaterialLibrary::new();
        assert!(library.is_empty());
        library.add_material("Glass").unwrap();

        library.get_mut("Glass").unwrap().dissolve = 0.25;
        assert_eq!(library.get_index(0).unwrap().dissolve, 0.25);
        assert_eq!(library.index_of("Glass"), Some(0));
        assert!(library.get_index(1).is_none());
        assert_eq!(library.iter().count(), 1);
    }

    #[test]
    fn test_from_material_list_rebuilds_index() {
        let library =
            MaterialLibrary::try_from(vec![Material::new("Brass".into()), Material::new("Chrome".into())])
                .unwrap();
        assert_eq!(library.index_of("Chrome"), Some(1));

        let duplicate =
            MaterialLibrary::try_from(vec![Material::new("Brass".into()), Material::new("Brass".into())]);
        assert_eq!(duplicate, Err(LibraryError::DuplicateName("Brass".to_string())));
    }
}
