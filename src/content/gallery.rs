use chrono::NaiveDate;
use serde::Deserialize;

use crate::carousel::Slide;
use crate::config;
use crate::error::ConfigurationError;

const GALLERY_JSON: &str = include_str!("gallery.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Luxury,
    Classic,
    Modern,
    Artistic,
    Seasonal,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Luxury => "luxury",
            Category::Classic => "classic",
            Category::Modern => "modern",
            Category::Artistic => "artistic",
            Category::Seasonal => "seasonal",
        }
    }
}

/// Filter values and labels, `all` first.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Designs"),
    ("luxury", "Luxury"),
    ("classic", "Classic"),
    ("modern", "Modern"),
    ("artistic", "Artistic"),
    ("seasonal", "Seasonal"),
];

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GalleryImage {
    pub id: u32,
    pub filename: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date_added: Option<NaiveDate>,
}

impl GalleryImage {
    pub fn path(&self) -> String {
        image_path(&self.filename)
    }

    pub fn slide(&self) -> Slide {
        Slide {
            source: self.path(),
            alt_text: self.title.clone(),
            caption: self.description.clone(),
        }
    }
}

pub fn image_path(filename: &str) -> String {
    format!("{}/{}", config::GALLERY_IMAGE_DIR, filename)
}

pub fn parse_gallery(json: &str) -> Result<Vec<GalleryImage>, ConfigurationError> {
    Ok(serde_json::from_str(json)?)
}

/// The gallery shipped with the site.
pub fn load_gallery() -> Result<Vec<GalleryImage>, ConfigurationError> {
    parse_gallery(GALLERY_JSON)
}

pub fn slides(images: &[GalleryImage]) -> Vec<Slide> {
    images.iter().map(GalleryImage::slide).collect()
}

pub fn featured(images: &[GalleryImage]) -> Vec<&GalleryImage> {
    images.iter().filter(|image| image.featured).collect()
}

/// `"all"` matches everything.
pub fn by_category<'a>(images: &'a [GalleryImage], category: &str) -> Vec<&'a GalleryImage> {
    images
        .iter()
        .filter(|image| category == "all" || image.category.as_str() == category)
        .collect()
}

pub fn by_tag<'a>(images: &'a [GalleryImage], tag: &str) -> Vec<&'a GalleryImage> {
    let tag = tag.to_lowercase();
    images
        .iter()
        .filter(|image| image.tags.iter().any(|t| *t == tag))
        .collect()
}

/// Newest first. Undated images sort last.
pub fn recent(images: &[GalleryImage], count: usize) -> Vec<&GalleryImage> {
    let mut newest: Vec<&GalleryImage> = images.iter().collect();
    newest.sort_by(|a, b| b.date_added.cmp(&a.date_added));
    newest.truncate(count);
    newest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Vec<GalleryImage> {
        load_gallery().expect("bundled gallery parses")
    }

    #[test]
    fn bundled_gallery_has_eight_images() {
        let images = gallery();
        assert_eq!(images.len(), 8);
        assert_eq!(images[0].title, "Elegant French Tips");
        assert_eq!(images[7].category, Category::Artistic);
    }

    #[test]
    fn slides_carry_path_title_and_description() {
        let images = gallery();
        let slides = slides(&images);
        assert_eq!(slides.len(), 8);
        assert_eq!(slides[1].source, "/assets/images/gallery/luxury-gold-accent.jpeg");
        assert_eq!(slides[1].alt_text, "Luxury Gold Accents");
        assert_eq!(slides[1].caption, images[1].description);
    }

    #[test]
    fn featured_images() {
        let images = gallery();
        let ids: Vec<u32> = featured(&images).iter().map(|image| image.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 8]);
    }

    #[test]
    fn category_filter() {
        let images = gallery();
        assert_eq!(by_category(&images, "all").len(), 8);
        assert_eq!(by_category(&images, "luxury").len(), 2);
        assert!(by_category(&images, "seasonal").is_empty());
    }

    #[test]
    fn tag_lookup_ignores_case() {
        let images = gallery();
        let ids: Vec<u32> = by_tag(&images, "Premium").iter().map(|image| image.id).collect();
        assert_eq!(ids, vec![2, 8]);
    }

    #[test]
    fn recent_orders_newest_first() {
        let images = parse_gallery(
            r#"[
                {"id": 1, "filename": "a.png", "title": "A", "description": "", "category": "classic", "date_added": "2025-01-10"},
                {"id": 2, "filename": "b.png", "title": "B", "description": "", "category": "modern"},
                {"id": 3, "filename": "c.png", "title": "C", "description": "", "category": "luxury", "date_added": "2025-03-02"},
                {"id": 4, "filename": "d.png", "title": "D", "description": "", "category": "artistic", "date_added": "2024-12-24"}
            ]"#,
        )
        .unwrap();

        let ids: Vec<u32> = recent(&images, 3).iter().map(|image| image.id).collect();
        assert_eq!(ids, vec![3, 1, 4]);
        assert_eq!(recent(&images, 10).len(), 4);
        assert_eq!(recent(&images, 10)[3].id, 2);
    }

    #[test]
    fn malformed_configuration_is_reported() {
        let err = parse_gallery(r#"[{"id": 1, "category": "neon"}]"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::Gallery(_)));
    }
}
