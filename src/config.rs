use serde::Deserialize;

pub const SHOP_NAME: &str = "Apex Auto Performance";
pub const SHOP_BLURB: &str = "Premium automotive services and customization in Ajax, Ontario.";
pub const SHOP_ADDRESS: &str = "232 Fairall St Unit 2B, Ajax, ON L1S 1R6";
pub const SHOP_PHONE: &str = "(905) 555-1234";
pub const SHOP_EMAIL: &str = "info@apexautoperformance.ca";

/// How long the app root keeps the loading screen mounted. Independent of
/// the loader's own progress counter, which is cosmetic.
pub const LOADER_HOLD_MS: u32 = 2_500;
pub const LOADER_TICK_MS: u32 = 100;
pub const LOADER_STEP: u32 = 5;

pub const HERO_ADVANCE_MS: u32 = 5_000;
pub const GALLERY_ADVANCE_MS: u32 = 2_000;

pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
pub const BOOK_NOW_SCROLL_THRESHOLD: f64 = 300.0;

#[derive(Clone, PartialEq, Deserialize)]
pub struct HeroSlide {
    pub image: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct GalleryItem {
    pub image: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct PartnerLogo {
    pub name: String,
    pub image: String,
}

/// Every image the page shows, listed explicitly so the data source is
/// reviewable and testable instead of being discovered by globbing an
/// asset directory at build time.
#[derive(Clone, PartialEq, Deserialize)]
pub struct AssetManifest {
    pub hero_slides: Vec<HeroSlide>,
    pub gallery: Vec<GalleryItem>,
    pub partners: Vec<PartnerLogo>,
    pub showcase_photos: Vec<GalleryItem>,
}

pub fn load_manifest() -> Result<AssetManifest, serde_json::Error> {
    serde_json::from_str(include_str!("../assets/manifest.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_and_is_populated() {
        let manifest = load_manifest().unwrap();
        assert!(!manifest.hero_slides.is_empty());
        assert!(!manifest.gallery.is_empty());
        assert!(!manifest.partners.is_empty());
        assert!(!manifest.showcase_photos.is_empty());
    }

    #[test]
    fn gallery_entries_carry_images() {
        let manifest = load_manifest().unwrap();
        for item in &manifest.gallery {
            assert!(!item.image.is_empty());
        }
    }

    // No asset directory is copied into the build, so every manifest
    // entry has to point at a remote URL.
    #[test]
    fn manifest_images_are_remote() {
        let manifest = load_manifest().unwrap();
        let images = manifest
            .hero_slides
            .iter()
            .map(|s| &s.image)
            .chain(manifest.gallery.iter().map(|i| &i.image))
            .chain(manifest.partners.iter().map(|p| &p.image))
            .chain(manifest.showcase_photos.iter().map(|i| &i.image));
        for image in images {
            assert!(image.starts_with("https://"), "local path: {}", image);
        }
    }
}
