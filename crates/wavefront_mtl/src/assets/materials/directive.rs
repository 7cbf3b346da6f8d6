//! Directive table: keyword -> decoder -> material field

use std::collections::TryReserveError;
use std::fmt;

use super::decoders::{decode_color, decode_float, decode_int, decode_single, DecodeError};
use super::library::MaterialLibrary;
use super::map_reference::decode_map;
use super::material::{ColorSlot, MapSlot, ReflectionFace, ScalarSlot};
use super::tokenizer::Tokenizer;

/// A recognized MTL directive keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `newmtl <name>`
    NewMaterial,
    /// `Ka`, `Kd`, `Ks`, `Tf`
    Color(ColorSlot),
    /// `Ns`, `d`, `Ni`
    Scalar(ScalarSlot),
    /// `illum`
    Illumination,
    /// `map_Kd`, `bump`, `decal`, ...
    Map(MapSlot),
    /// `refl -type <face> <file>`
    Reflection,
}

impl Directive {
    /// Directive introduced by `keyword`
    ///
    /// Matching is exact, so `d` never matches `decal` or `disp`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let directive = match keyword {
            "newmtl" => Self::NewMaterial,
            "Ka" => Self::Color(ColorSlot::Ambient),
            "Kd" => Self::Color(ColorSlot::Diffuse),
            "Ks" => Self::Color(ColorSlot::Specular),
            "Tf" => Self::Color(ColorSlot::Transmission),
            "Ns" => Self::Scalar(ScalarSlot::SpecularExponent),
            "d" => Self::Scalar(ScalarSlot::Dissolve),
            "Ni" => Self::Scalar(ScalarSlot::OpticalDensity),
            "illum" => Self::Illumination,
            "map_Ka" => Self::Map(MapSlot::Ambient),
            "map_Kd" => Self::Map(MapSlot::Diffuse),
            "map_Kn" => Self::Map(MapSlot::Normal),
            "map_Ks" => Self::Map(MapSlot::SpecularColor),
            "map_Ns" => Self::Map(MapSlot::SpecularHighlight),
            "map_d" => Self::Map(MapSlot::Alpha),
            "bump" | "map_bump" | "map_Bump" => Self::Map(MapSlot::Bump),
            "disp" => Self::Map(MapSlot::Displacement),
            "decal" => Self::Map(MapSlot::Decal),
            "refl" => Self::Reflection,
            _ => return None,
        };
        Some(directive)
    }

    /// Decode the rest of the line and store the result
    ///
    /// `current` is the index of the material that receives data; `newmtl` is the only
    /// directive that changes it. Every other directive is a no-op while it is `None`.
    pub(crate) fn apply(
        self,
        library: &mut MaterialLibrary,
        current: &mut Option<usize>,
        tokens: &mut Tokenizer<'_, '_>,
    ) -> Result<(), DirectiveFailure> {
        if self == Self::NewMaterial {
            match decode_single(tokens) {
                Some(name) => *current = Some(library.add_material(name)?),
                None => log::debug!("Ignoring newmtl without exactly one name"),
            }
            return Ok(());
        }

        let Some(material) = current.and_then(|index| library.get_index_mut(index)) else {
            log::trace!("Ignoring {} before the first newmtl", self);
            return Ok(());
        };

        match self {
            Self::NewMaterial => {}
            Self::Color(slot) => *material.color_mut(slot) = decode_color(tokens)?,
            Self::Scalar(slot) => *material.scalar_mut(slot) = decode_float(tokens),
            Self::Illumination => material.illumination_model = decode_int(tokens),
            Self::Map(slot) => *material.map_mut(slot) = Some(decode_map(tokens)?),
            Self::Reflection => match decode_reflection_face(tokens) {
                Some(face) => {
                    *material.map_mut(MapSlot::Reflection(face)) = Some(decode_map(tokens)?);
                }
                None => log::debug!("Ignoring refl without a recognized -type"),
            },
        }

        Ok(())
    }
}

/// Read the `-type <face>` option that must open a `refl` directive
fn decode_reflection_face(tokens: &mut Tokenizer<'_, '_>) -> Option<ReflectionFace> {
    let flag = tokens.next_value()?;
    if flag.text != "-type" {
        return None;
    }
    ReflectionFace::from_keyword(tokens.next_value()?.text)
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewMaterial => f.write_str("newmtl"),
            Self::Color(ColorSlot::Ambient) => f.write_str("Ka"),
            Self::Color(ColorSlot::Diffuse) => f.write_str("Kd"),
            Self::Color(ColorSlot::Specular) => f.write_str("Ks"),
            Self::Color(ColorSlot::Transmission) => f.write_str("Tf"),
            Self::Scalar(ScalarSlot::SpecularExponent) => f.write_str("Ns"),
            Self::Scalar(ScalarSlot::Dissolve) => f.write_str("d"),
            Self::Scalar(ScalarSlot::OpticalDensity) => f.write_str("Ni"),
            Self::Illumination => f.write_str("illum"),
            Self::Map(slot) => fmt::Display::fmt(slot, f),
            Self::Reflection => f.write_str("refl"),
        }
    }
}

/// Failure inside one directive, before the driver attaches a line number
#[derive(Debug)]
pub(crate) enum DirectiveFailure {
    Decode(DecodeError),
    Allocation(TryReserveError),
}

impl From<DecodeError> for DirectiveFailure {
    fn from(error: DecodeError) -> Self {
        Self::Decode(error)
    }
}

impl From<TryReserveError> for DirectiveFailure {
    fn from(error: TryReserveError) -> Self {
        Self::Allocation(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::materials::material::Color;

    fn apply(library: &mut MaterialLibrary, current: &mut Option<usize>, line: &str) {
        let mut tokens = Tokenizer::new(line, " \t");
        let keyword = tokens.next().unwrap();
        Directive::from_keyword(keyword.text)
            .unwrap()
            .apply(library, current, &mut tokens)
            .unwrap();
    }

    #[test]
    fn test_keywords_match_exactly() {
        assert_eq!(
            Directive::from_keyword("d"),
            Some(Directive::Scalar(ScalarSlot::Dissolve))
        );
        assert_eq!(
            Directive::from_keyword("decal"),
            Some(Directive::Map(MapSlot::Decal))
        );
        assert_eq!(Directive::from_keyword("di"), None);
        assert_eq!(Directive::from_keyword("ka"), None);
        assert_eq!(Directive::from_keyword("newmtl2"), None);
        assert_eq!(Directive::from_keyword("Ke"), None);
        assert_eq!(Directive::from_keyword("Tr"), None);
    }

    #[test]
    fn test_display_names_canonical_keyword() {
        assert_eq!(Directive::Color(ColorSlot::Transmission).to_string(), "Tf");
        assert_eq!(Directive::Map(MapSlot::Bump).to_string(), "bump");
        assert_eq!(
            Directive::from_keyword("map_Bump").unwrap().to_string(),
            "bump"
        );
    }

    #[test]
    fn test_newmtl_selects_current() {
        let mut library = MaterialLibrary::new();
        let mut current = None;
        apply(&mut library, &mut current, "newmtl A");
        apply(&mut library, &mut current, "newmtl B");
        assert_eq!(current, Some(1));
        apply(&mut library, &mut current, "newmtl A");
        assert_eq!(current, Some(0));
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_malformed_newmtl_keeps_current() {
        let mut library = MaterialLibrary::new();
        let mut current = None;
        apply(&mut library, &mut current, "newmtl A");
        apply(&mut library, &mut current, "newmtl");
        apply(&mut library, &mut current, "newmtl B C");
        assert_eq!(current, Some(0));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_directive_without_current_is_noop() {
        let mut library = MaterialLibrary::new();
        let mut current = None;
        apply(&mut library, &mut current, "Kd 1 0 0");
        apply(&mut library, &mut current, "map_Kd x.png");
        assert!(library.is_empty());
        assert_eq!(current, None);
    }

    #[test]
    fn test_writes_go_to_current_material() {
        let mut library = MaterialLibrary::new();
        let mut current = None;
        apply(&mut library, &mut current, "newmtl A");
        apply(&mut library, &mut current, "newmtl B");
        apply(&mut library, &mut current, "Kd 0.5");
        apply(&mut library, &mut current, "d 0.25");

        assert_eq!(library[0].diffuse, Color::ZERO);
        assert_eq!(library[1].diffuse, Color::splat(0.5));
        assert_eq!(library[1].dissolve, 0.25);
    }

    #[test]
    fn test_reflection_requires_type_first() {
        let mut library = MaterialLibrary::new();
        let mut current = None;
        apply(&mut library, &mut current, "newmtl A");
        apply(&mut library, &mut current, "refl sphere.png");
        apply(&mut library, &mut current, "refl -type dome dome.png");
        assert_eq!(library[0].maps().count(), 0);

        apply(&mut library, &mut current, "refl -type cube_front -clamp on ft.png");
        let front = library[0]
            .map(MapSlot::Reflection(ReflectionFace::CubeFront))
            .unwrap();
        assert_eq!(front.file, "ft.png");
        assert_eq!(front.options.len(), 1);
    }
}
