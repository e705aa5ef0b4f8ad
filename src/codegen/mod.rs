//! Source generation for a [`Scene`]: structural markup, class listing, animation code, or all
//! three combined.
//!
//! Every function here is total and deterministic: the same scene value always yields the same
//! bytes, which is what makes [`cache::CodeCache`] sound.

/// Fingerprint-keyed cache of generated code.
pub mod cache;
/// JavaScript literal formatting.
pub mod literal;
/// Structural (JSX) view.
pub mod markup;
/// Animation code emitters.
pub mod motion;
/// Class-list (Tailwind) view.
pub mod styles;

use serde::{Deserialize, Serialize};

use crate::codegen::markup::{MARKUP_HEADER, render_markup};
use crate::codegen::motion::{Framework, animation_code};
use crate::codegen::styles::{STYLES_HEADER, collect_class_lists};
use crate::scene::model::Scene;

const ANIMATIONS_HEADER: &str = "// Animations";

/// Selectable output view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeView {
    /// Structural markup.
    #[default]
    Jsx,
    /// Class lists found in props.
    Tailwind,
    /// Animation code.
    Animations,
    /// All of the above, each under a header.
    All,
}

impl CodeView {
    pub const ALL: [CodeView; 4] = [Self::Jsx, Self::Tailwind, Self::Animations, Self::All];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jsx => "jsx",
            Self::Tailwind => "tailwind",
            Self::Animations => "animations",
            Self::All => "all",
        }
    }
}

/// Generation options. Defaults: two-space indentation, Framer Motion animation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenOpts {
    pub indent_width: usize,
    pub framework: Framework,
}

impl Default for CodegenOpts {
    fn default() -> Self {
        Self {
            indent_width: 2,
            framework: Framework::FramerMotion,
        }
    }
}

/// Generate `view` for `scene`.
#[tracing::instrument(skip(scene, opts), fields(view = view.as_str()))]
pub fn generate(scene: &Scene, view: CodeView, opts: &CodegenOpts) -> String {
    match view {
        CodeView::Jsx => structural_view(scene, opts),
        CodeView::Tailwind => style_view(scene),
        CodeView::Animations => animation_view(scene, opts),
        CodeView::All => format!(
            "{}\n\n{}\n\n{}\n{}",
            structural_view(scene, opts),
            style_view(scene),
            ANIMATIONS_HEADER,
            animation_view(scene, opts)
        ),
    }
}

pub fn structural_view(scene: &Scene, opts: &CodegenOpts) -> String {
    format!(
        "{MARKUP_HEADER}\n{}",
        render_markup(scene.root(), opts.indent_width)
    )
}

pub fn style_view(scene: &Scene) -> String {
    format!(
        "{STYLES_HEADER}\n{}",
        collect_class_lists(scene.root()).join("\n")
    )
}

/// One block per animation in list order, separated by a blank line. Targets are not resolved,
/// so animations pointing at removed nodes still emit.
pub fn animation_view(scene: &Scene, opts: &CodegenOpts) -> String {
    scene
        .animations()
        .iter()
        .map(|a| animation_code(a, opts.framework).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
#[path = "../../tests/unit/codegen/generate.rs"]
mod tests;
