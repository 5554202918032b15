//! Shared types used across the crate: the resampling filter selector and the
//! named square output sizes that make up an icon set.
use std::path::{Component, Path};
use std::str::FromStr;

use clap::ValueEnum;
use fast_image_resize::{FilterType, ResizeAlg};
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Mitchell,
    Bilinear,
    Box,
    Nearest,
}

impl ResampleFilter {
    pub fn resize_alg(self) -> ResizeAlg {
        match self {
            ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
            ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
            ResampleFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
            ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            ResampleFilter::Box => ResizeAlg::Convolution(FilterType::Box),
            ResampleFilter::Nearest => ResizeAlg::Nearest,
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResampleFilter::Lanczos3 => "lanczos3",
            ResampleFilter::CatmullRom => "catmull-rom",
            ResampleFilter::Mitchell => "mitchell",
            ResampleFilter::Bilinear => "bilinear",
            ResampleFilter::Box => "box",
            ResampleFilter::Nearest => "nearest",
        };
        write!(f, "{}", s)
    }
}

/// True when `name` is exactly one plain path component (no separators, no `..`).
pub(crate) fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// One resolution class of an icon set: the directory it lands in and its
/// square edge length in pixels.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IconSize {
    pub name: String,
    pub size: u32,
}

impl IconSize {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Android launcher densities, mdpi through xxxhdpi.
    pub fn android_defaults() -> Vec<IconSize> {
        [
            ("mipmap-mdpi", 48),
            ("mipmap-hdpi", 72),
            ("mipmap-xhdpi", 96),
            ("mipmap-xxhdpi", 144),
            ("mipmap-xxxhdpi", 192),
        ]
        .into_iter()
        .map(|(name, size)| IconSize::new(name, size))
        .collect()
    }

    /// Rejects entries that would write outside the resource root or produce an empty image.
    pub fn validate(&self) -> crate::Result<()> {
        if self.size == 0 {
            return Err(Error::invalid("size", format!("{}={}", self.name, self.size)));
        }
        if !is_single_component(&self.name) {
            return Err(Error::invalid("name", &self.name));
        }
        Ok(())
    }
}

impl FromStr for IconSize {
    type Err = Error;

    /// Parses `name=px`, e.g. `mipmap-xxxhdpi=192`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, px) = s
            .split_once('=')
            .ok_or_else(|| Error::invalid("size", s))?;
        let size = px
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::invalid("size", s))?;
        let entry = IconSize::new(name.trim(), size);
        entry.validate()?;
        Ok(entry)
    }
}

impl std::fmt::Display for IconSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.size)
    }
}
