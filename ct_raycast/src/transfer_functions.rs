//! Transfer functions map a sample to color and opacity.
//!
//! Renderers look them up by name in [`TransferFunctions`].
//! New variants can be registered without touching the renderers.

use log::warn;

use crate::{
    color::RGBA,
    premade::transfer_functions::{SkinBoneTf, SkinTf},
};

/// Variant selected by default render options
pub const DEFAULT_TF: &str = "TF1";

/// Variant used when a lookup fails, hides bone
pub const FALLBACK_TF: &str = "TF2";

pub trait TransferFunction: Send + Sync {
    /// R G B A, all channels <0;1>
    fn classify(&self, sample: i16) -> RGBA;
}

/// Plain functions and closures work as transfer functions
impl<F> TransferFunction for F
where
    F: Fn(i16) -> RGBA + Send + Sync,
{
    fn classify(&self, sample: i16) -> RGBA {
        self(sample)
    }
}

/// Constructs a transfer function from the configured soft tissue opacity
pub type TfConstructor = fn(f32) -> Box<dyn TransferFunction>;

/// Registry of named transfer functions
pub struct TransferFunctions {
    entries: Vec<(String, TfConstructor)>,
    fallback: String,
}

impl TransferFunctions {
    /// Registry without any variants.
    /// Lookups then always resolve to `SkinTf`.
    pub fn empty() -> TransferFunctions {
        TransferFunctions {
            entries: Vec::new(),
            fallback: FALLBACK_TF.to_owned(),
        }
    }

    /// Variant used for unknown names, [`FALLBACK_TF`] unless changed
    pub fn set_fallback(&mut self, name: &str) {
        self.fallback = name.to_owned();
    }

    /// Add variant, replacing a previous one of the same name
    pub fn register(&mut self, name: &str, constructor: TfConstructor) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = constructor,
            None => self.entries.push((name.to_owned(), constructor)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Instantiate variant `name`.
    /// Unknown names fall back to the fallback variant,
    /// `SkinTf` if that is not registered either.
    pub fn get(&self, name: &str, soft_tissue_opacity: f32) -> Box<dyn TransferFunction> {
        if let Some(constructor) = self.find(name) {
            return constructor(soft_tissue_opacity);
        }

        let known = self.names().collect::<Vec<_>>().join(", ");
        warn!(
            "Unknown transfer function '{name}' (known: {known}), using {}",
            self.fallback
        );

        match self.find(&self.fallback) {
            Some(constructor) => constructor(soft_tissue_opacity),
            None => Box::new(SkinTf {
                skin_opacity: soft_tissue_opacity,
            }),
        }
    }

    fn find(&self, name: &str) -> Option<TfConstructor> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, constructor)| constructor)
    }
}

impl Default for TransferFunctions {
    fn default() -> Self {
        let mut tfs = TransferFunctions::empty();
        tfs.register("TF1", |skin_opacity| Box::new(SkinBoneTf { skin_opacity }));
        tfs.register("TF2", |skin_opacity| Box::new(SkinTf { skin_opacity }));
        tfs
    }
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;
    use crate::color;

    #[test]
    fn default_variants() {
        let tfs = TransferFunctions::default();
        let names: Vec<_> = tfs.names().collect();
        assert_eq!(names, vec!["TF1", "TF2"]);

        let tf1 = tfs.get("TF1", 0.12);
        let tf2 = tfs.get("TF2", 0.12);
        assert_eq!(tf1.classify(1000), vector![1.0, 1.0, 1.0, 0.8]);
        assert_eq!(tf2.classify(1000), color::zero());
        assert_eq!(tf1.classify(0), tf2.classify(0));
    }

    #[test]
    fn opacity_is_passed() {
        let tfs = TransferFunctions::default();
        assert_eq!(tfs.get("TF2", 0.33).classify(0).w, 0.33);
    }

    #[test]
    fn unknown_falls_back() {
        let tfs = TransferFunctions::default();
        let tf = tfs.get("no such tf", 0.12);
        assert_eq!(tf.classify(1000), color::zero());
        assert_eq!(tf.classify(0), color::new(1.0, 0.79, 0.6, 0.12));

        let tf = TransferFunctions::empty().get("TF1", 0.12);
        assert_eq!(tf.classify(1000), color::zero());
    }

    #[test]
    fn configurable_fallback() {
        let mut tfs = TransferFunctions::default();
        tfs.set_fallback("TF1");

        let tf = tfs.get("no such tf", 0.12);
        assert_eq!(tf.classify(1000), vector![1.0, 1.0, 1.0, 0.8]);
    }

    #[test]
    fn register_new_variant() {
        let mut tfs = TransferFunctions::default();
        tfs.register("red", |_| {
            Box::new(|sample: i16| {
                if sample > 0 {
                    color::new(1.0, 0.0, 0.0, 1.0)
                } else {
                    color::zero()
                }
            })
        });

        assert!(tfs.names().any(|n| n == "red"));
        assert_eq!(tfs.get("red", 0.0).classify(5), vector![1.0, 0.0, 0.0, 1.0]);
    }
}
