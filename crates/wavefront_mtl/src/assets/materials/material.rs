//! Material record produced by the MTL parser
//!
//! Field naming follows the Wavefront Phong model: `Ka`/`Kd`/`Ks`/`Tf` colors, `Ns`/`d`/`Ni`
//! scalars, the `illum` model number and one optional map reference per texture slot.

use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::map_reference::MapReference;
use crate::foundation::math::{Vec3, Vec4};

/// RGBA color with `f32` channels
///
/// Colors decoded from MTL text always have `a == 1.0`; the format carries no alpha channel.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl Color {
    /// All channels zero, the value of every color field before a directive sets it
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from all four channels
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Opaque gray with every color channel set to `value`
    pub const fn splat(value: f32) -> Self {
        Self::rgb(value, value, value)
    }

    /// Channels as `[r, g, b, a]`
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Color channels without alpha
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// All four channels
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }
}

impl From<Color> for Vec4 {
    fn from(color: Color) -> Self {
        color.to_vec4()
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl AbsDiffEq for Color {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.a.abs_diff_eq(&other.a, epsilon)
    }
}

impl RelativeEq for Color {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.g.relative_eq(&other.g, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
            && self.a.relative_eq(&other.a, epsilon, max_relative)
    }
}

/// Color fields of a [`Material`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    /// `Ka`
    Ambient,
    /// `Kd`
    Diffuse,
    /// `Ks`
    Specular,
    /// `Tf`, also used as the transmission filter
    Transmission,
}

/// Floating point fields of a [`Material`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarSlot {
    /// `Ns`
    SpecularExponent,
    /// `d`
    Dissolve,
    /// `Ni`
    OpticalDensity,
}

/// Target of a `refl -type <face>` directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReflectionFace {
    /// Spherical environment map
    Sphere,
    /// Cube map, +Y face
    CubeTop,
    /// Cube map, -Y face
    CubeBottom,
    /// Cube map, front face
    CubeFront,
    /// Cube map, back face
    CubeBack,
    /// Cube map, left face
    CubeLeft,
    /// Cube map, right face
    CubeRight,
}

impl ReflectionFace {
    /// Every face, in declaration order
    pub const ALL: [Self; 7] = [
        Self::Sphere,
        Self::CubeTop,
        Self::CubeBottom,
        Self::CubeFront,
        Self::CubeBack,
        Self::CubeLeft,
        Self::CubeRight,
    ];

    /// Face named by the argument of `-type`
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.keyword() == keyword)
    }

    /// Argument of `-type` naming this face
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::CubeTop => "cube_top",
            Self::CubeBottom => "cube_bottom",
            Self::CubeFront => "cube_front",
            Self::CubeBack => "cube_back",
            Self::CubeLeft => "cube_left",
            Self::CubeRight => "cube_right",
        }
    }
}

/// Texture map slots of a [`Material`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapSlot {
    /// `map_Ka`
    Ambient,
    /// `map_Kd`
    Diffuse,
    /// `map_Kn`, the normal map alternative to `bump`
    Normal,
    /// `map_Ks`
    SpecularColor,
    /// `map_Ns`
    SpecularHighlight,
    /// `map_d`
    Alpha,
    /// `bump` / `map_bump`
    Bump,
    /// `disp`
    Displacement,
    /// `decal`
    Decal,
    /// `refl -type <face>`
    Reflection(ReflectionFace),
}

impl MapSlot {
    /// Every slot, in the order [`Material::maps`] reports them
    pub const ALL: [Self; 16] = [
        Self::Ambient,
        Self::Diffuse,
        Self::Normal,
        Self::SpecularColor,
        Self::SpecularHighlight,
        Self::Alpha,
        Self::Bump,
        Self::Displacement,
        Self::Decal,
        Self::Reflection(ReflectionFace::Sphere),
        Self::Reflection(ReflectionFace::CubeTop),
        Self::Reflection(ReflectionFace::CubeBottom),
        Self::Reflection(ReflectionFace::CubeFront),
        Self::Reflection(ReflectionFace::CubeBack),
        Self::Reflection(ReflectionFace::CubeLeft),
        Self::Reflection(ReflectionFace::CubeRight),
    ];
}

impl fmt::Display for MapSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ambient => f.write_str("map_Ka"),
            Self::Diffuse => f.write_str("map_Kd"),
            Self::Normal => f.write_str("map_Kn"),
            Self::SpecularColor => f.write_str("map_Ks"),
            Self::SpecularHighlight => f.write_str("map_Ns"),
            Self::Alpha => f.write_str("map_d"),
            Self::Bump => f.write_str("bump"),
            Self::Displacement => f.write_str("disp"),
            Self::Decal => f.write_str("decal"),
            Self::Reflection(face) => write!(f, "refl -type {}", face.keyword()),
        }
    }
}

/// Parsed MTL material data (Wavefront Phong model)
///
/// Every color and scalar starts at zero and every map slot starts empty; only directives
/// present in the source change them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material name, unique within its library
    pub name: String,
    /// Ambient color (Ka)
    pub ambient: Color,
    /// Diffuse color (Kd)
    pub diffuse: Color,
    /// Specular color (Ks)
    pub specular: Color,
    /// Transmission filter color (Tf)
    pub transmission: Color,
    /// Specular exponent (Ns)
    pub specular_exponent: f32,
    /// Dissolve/opacity (d) - 0.0 = transparent, 1.0 = opaque
    pub dissolve: f32,
    /// Optical density / index of refraction (Ni)
    pub optical_density: f32,
    /// Illumination model (illum)
    pub illumination_model: i32,
    /// Ambient texture map (map_Ka)
    pub ambient_map: Option<MapReference>,
    /// Diffuse texture map (map_Kd)
    pub diffuse_map: Option<MapReference>,
    /// Normal map (map_Kn)
    pub normal_map: Option<MapReference>,
    /// Specular color map (map_Ks)
    pub specular_color_map: Option<MapReference>,
    /// Specular highlight map (map_Ns)
    pub specular_highlight_map: Option<MapReference>,
    /// Alpha map (map_d)
    pub alpha_map: Option<MapReference>,
    /// Bump map (bump / map_bump)
    pub bump_map: Option<MapReference>,
    /// Displacement map (disp)
    pub displacement_map: Option<MapReference>,
    /// Decal map (decal)
    pub decal_map: Option<MapReference>,
    /// Spherical reflection map
    pub reflection_sphere_map: Option<MapReference>,
    /// Cube reflection map, top face
    pub reflection_cube_top_map: Option<MapReference>,
    /// Cube reflection map, bottom face
    pub reflection_cube_bottom_map: Option<MapReference>,
    /// Cube reflection map, front face
    pub reflection_cube_front_map: Option<MapReference>,
    /// Cube reflection map, back face
    pub reflection_cube_back_map: Option<MapReference>,
    /// Cube reflection map, left face
    pub reflection_cube_left_map: Option<MapReference>,
    /// Cube reflection map, right face
    pub reflection_cube_right_map: Option<MapReference>,
}

impl Material {
    /// Create an all-zero material with the given name
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Color stored in `slot`
    pub const fn color(&self, slot: ColorSlot) -> Color {
        match slot {
            ColorSlot::Ambient => self.ambient,
            ColorSlot::Diffuse => self.diffuse,
            ColorSlot::Specular => self.specular,
            ColorSlot::Transmission => self.transmission,
        }
    }

    /// Mutable access to the color stored in `slot`
    pub fn color_mut(&mut self, slot: ColorSlot) -> &mut Color {
        match slot {
            ColorSlot::Ambient => &mut self.ambient,
            ColorSlot::Diffuse => &mut self.diffuse,
            ColorSlot::Specular => &mut self.specular,
            ColorSlot::Transmission => &mut self.transmission,
        }
    }

    /// Scalar stored in `slot`
    pub const fn scalar(&self, slot: ScalarSlot) -> f32 {
        match slot {
            ScalarSlot::SpecularExponent => self.specular_exponent,
            ScalarSlot::Dissolve => self.dissolve,
            ScalarSlot::OpticalDensity => self.optical_density,
        }
    }

    /// Mutable access to the scalar stored in `slot`
    pub fn scalar_mut(&mut self, slot: ScalarSlot) -> &mut f32 {
        match slot {
            ScalarSlot::SpecularExponent => &mut self.specular_exponent,
            ScalarSlot::Dissolve => &mut self.dissolve,
            ScalarSlot::OpticalDensity => &mut self.optical_density,
        }
    }

    /// Map reference stored in `slot`, if a directive set it
    pub const fn map(&self, slot: MapSlot) -> Option<&MapReference> {
        match slot {
            MapSlot::Ambient => self.ambient_map.as_ref(),
            MapSlot::Diffuse => self.diffuse_map.as_ref(),
            MapSlot::Normal => self.normal_map.as_ref(),
            MapSlot::SpecularColor => self.specular_color_map.as_ref(),
            MapSlot::SpecularHighlight => self.specular_highlight_map.as_ref(),
            MapSlot::Alpha => self.alpha_map.as_ref(),
            MapSlot::Bump => self.bump_map.as_ref(),
            MapSlot::Displacement => self.displacement_map.as_ref(),
            MapSlot::Decal => self.decal_map.as_ref(),
            MapSlot::Reflection(face) => match face {
                ReflectionFace::Sphere => self.reflection_sphere_map.as_ref(),
                ReflectionFace::CubeTop => self.reflection_cube_top_map.as_ref(),
                ReflectionFace::CubeBottom => self.reflection_cube_bottom_map.as_ref(),
                ReflectionFace::CubeFront => self.reflection_cube_front_map.as_ref(),
                ReflectionFace::CubeBack => self.reflection_cube_back_map.as_ref(),
                ReflectionFace::CubeLeft => self.reflection_cube_left_map.as_ref(),
                ReflectionFace::CubeRight => self.reflection_cube_right_map.as_ref(),
            },
        }
    }

    /// Mutable access to the map reference stored in `slot`
    pub fn map_mut(&mut self, slot: MapSlot) -> &mut Option<MapReference> {
        match slot {
            MapSlot::Ambient => &mut self.ambient_map,
            MapSlot::Diffuse => &mut self.diffuse_map,
            MapSlot::Normal => &mut self.normal_map,
            MapSlot::SpecularColor => &mut self.specular_color_map,
            MapSlot::SpecularHighlight => &mut self.specular_highlight_map,
            MapSlot::Alpha => &mut self.alpha_map,
            MapSlot::Bump => &mut self.bump_map,
            MapSlot::Displacement => &mut self.displacement_map,
            MapSlot::Decal => &mut self.decal_map,
            MapSlot::Reflection(face) => match face {
                ReflectionFace::Sphere => &mut self.reflection_sphere_map,
                ReflectionFace::CubeTop => &mut self.reflection_cube_top_map,
                ReflectionFace::CubeBottom => &mut self.reflection_cube_bottom_map,
                ReflectionFace::CubeFront => &mut self.reflection_cube_front_map,
                ReflectionFace::CubeBack => &mut self.reflection_cube_back_map,
                ReflectionFace::CubeLeft => &mut self.reflection_cube_left_map,
                ReflectionFace::CubeRight => &mut self.reflection_cube_right_map,
            },
        }
    }

    /// Every map slot that has a reference, in [`MapSlot::ALL`] order
    pub fn maps(&self) -> impl Iterator<Item = (MapSlot, &MapReference)> + '_ {
        MapSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.map(slot).map(|map| (slot, map)))
    }
}
