use serde::Deserialize;
use url::Url;

use crate::config;

// Raw records as the backend sends them. Field names follow the API, so most
// structs rename from camelCase; anything the CMS may leave blank is defaulted.

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawService {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawTestimonial {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "designation")]
    pub role: Option<String>,
    #[serde(alias = "testimonial", alias = "content")]
    pub message: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RawFaq {
    #[serde(alias = "_id")]
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawUpdate {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "text")]
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawBanner {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(alias = "image")]
    pub image_url: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawGalleryRoute {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawVideo {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(alias = "url", alias = "videoUrl")]
    pub youtube_url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawCourse {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub slug: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub message: String,
    pub rating: u8,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LatestUpdate {
    pub id: String,
    pub title: String,
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryRoute {
    pub id: String,
    pub title: String,
    pub images: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub youtube_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: Option<String>,
    pub image_url: Option<String>,
}

/// Uploaded media comes back as a path relative to the API host.
pub fn asset_url(path: &str) -> String {
    resolve_against(config::get_backend_url(), path)
}

fn resolve_against(base: &str, path: &str) -> String {
    if Url::parse(path).is_ok() {
        return path.to_string();
    }
    match Url::parse(base).and_then(|base| base.join(path)) {
        Ok(url) => url.into(),
        // same-origin builds have no absolute base
        Err(_) => format!("{}/{}", base, path.trim_start_matches('/')),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn map_service(raw: RawService) -> Service {
    let summary = non_empty(raw.short_description)
        .or_else(|| non_empty(raw.description))
        .unwrap_or_default();
    let slug = non_empty(raw.slug).unwrap_or_else(|| slugify(&raw.title));
    Service {
        id: raw.id,
        title: raw.title,
        summary,
        image_url: non_empty(raw.image).map(|p| asset_url(&p)),
        price: raw.price,
        slug,
    }
}

pub fn map_testimonial(raw: RawTestimonial) -> Testimonial {
    let rating = raw.rating.unwrap_or(5.0).round().clamp(0.0, 5.0) as u8;
    Testimonial {
        id: raw.id,
        name: raw.name,
        role: non_empty(raw.role).unwrap_or_else(|| "Client".to_string()),
        message: raw.message,
        rating,
        image_url: non_empty(raw.image_url).map(|p| asset_url(&p)),
    }
}

pub fn map_faq(raw: RawFaq) -> Faq {
    Faq {
        id: raw.id,
        question: raw.question,
        answer: raw.answer,
        category: non_empty(raw.category),
    }
}

pub fn map_update(raw: RawUpdate) -> LatestUpdate {
    LatestUpdate {
        id: raw.id,
        title: raw.title,
        link: non_empty(raw.link),
    }
}

pub fn map_banner(raw: RawBanner) -> Banner {
    Banner {
        id: raw.id,
        title: raw.title.unwrap_or_default(),
        subtitle: raw.subtitle.unwrap_or_default(),
        image_url: asset_url(&raw.image_url),
        link: non_empty(raw.link),
    }
}

pub fn map_gallery_route(raw: RawGalleryRoute) -> GalleryRoute {
    GalleryRoute {
        id: raw.id,
        title: raw.title,
        images: raw.images.iter().map(|p| asset_url(p)).collect(),
    }
}

pub fn map_video(raw: RawVideo) -> Video {
    Video {
        id: raw.id,
        title: non_empty(raw.title).unwrap_or_else(|| "Watch on YouTube".to_string()),
        youtube_url: raw.youtube_url,
    }
}

pub fn map_course(raw: RawCourse) -> Course {
    Course {
        id: raw.id,
        title: raw.title,
        description: raw.description.unwrap_or_default(),
        duration: non_empty(raw.duration),
        image_url: non_empty(raw.image).map(|p| asset_url(&p)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonial_maps_backend_aliases() {
        let raw: RawTestimonial = serde_json::from_str(
            r#"{"_id":"t1","name":"Ravi","designation":"Founder, Ravi Foods","testimonial":"Got my FSSAI license in a week.","rating":4.6,"image":"/uploads/ravi.jpg"}"#,
        )
        .unwrap();
        let t = map_testimonial(raw);
        assert_eq!(t.id, "t1");
        assert_eq!(t.role, "Founder, Ravi Foods");
        assert_eq!(t.message, "Got my FSSAI license in a week.");
        assert_eq!(t.rating, 5);
        assert!(t.image_url.unwrap().ends_with("/uploads/ravi.jpg"));
    }

    #[test]
    fn testimonial_defaults_and_clamps() {
        let raw: RawTestimonial = serde_json::from_str(
            r#"{"id":"t2","name":"Meena","message":"Great","rating":9}"#,
        )
        .unwrap();
        let t = map_testimonial(raw);
        assert_eq!(t.role, "Client");
        assert_eq!(t.rating, 5);
        assert_eq!(t.image_url, None);
    }

    #[test]
    fn service_summary_falls_back_to_description() {
        let raw: RawService = serde_json::from_str(
            r#"{"_id":"s1","name":"GST Registration","shortDescription":"  ","description":"Register for GST."}"#,
        )
        .unwrap();
        let s = map_service(raw);
        assert_eq!(s.summary, "Register for GST.");
        assert_eq!(s.slug, "gst-registration");
    }

    #[test]
    fn absolute_urls_are_left_alone() {
        assert_eq!(
            resolve_against("https://api.test", "https://cdn.test/a.png"),
            "https://cdn.test/a.png"
        );
        assert_eq!(resolve_against("https://api.test", "/a.png"), "https://api.test/a.png");
        assert_eq!(resolve_against("https://api.test", "a.png"), "https://api.test/a.png");
    }

    #[test]
    fn relative_paths_join_the_api_host() {
        assert_eq!(
            resolve_against("http://localhost:3001", "uploads/banner.jpg"),
            "http://localhost:3001/uploads/banner.jpg"
        );
        assert_eq!(
            resolve_against("https://api.test", "data:image/png;base64,AAAA"),
            "data:image/png;base64,AAAA"
        );
        assert_eq!(resolve_against("", "uploads/a.png"), "/uploads/a.png");
        assert_eq!(resolve_against("", "/uploads/a.png"), "/uploads/a.png");
    }

    #[test]
    fn update_accepts_text_field() {
        let raw: RawUpdate = serde_json::from_str(r#"{"_id":"u1","text":"GST filing due 20th","link":""}"#).unwrap();
        let u = map_update(raw);
        assert_eq!(u.title, "GST filing due 20th");
        assert_eq!(u.link, None);
    }
}
