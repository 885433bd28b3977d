use super::envelope::Envelope;

/// A read-only collection endpoint and the envelope it answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    /// Used in the error text shown to visitors ("Failed to load FAQs: ...").
    pub label: &'static str,
    pub envelope: Envelope,
}

pub const SERVICES: Endpoint = Endpoint {
    path: "/api/services",
    label: "services",
    envelope: Envelope::StatusCode,
};

pub const TESTIMONIALS: Endpoint = Endpoint {
    path: "/api/testimonials",
    label: "testimonials",
    envelope: Envelope::SuccessFlag,
};

pub const FAQS: Endpoint = Endpoint {
    path: "/api/faqs",
    label: "FAQs",
    envelope: Envelope::StatusCode,
};

pub const LATEST_UPDATES: Endpoint = Endpoint {
    path: "/api/latestUpdates",
    label: "latest updates",
    envelope: Envelope::SuccessFlag,
};

pub const BANNERS: Endpoint = Endpoint {
    path: "/api/banners",
    label: "banners",
    envelope: Envelope::SuccessFlag,
};

pub const GALLERY_ROUTES: Endpoint = Endpoint {
    path: "/api/galleryRoutes",
    label: "gallery",
    envelope: Envelope::SuccessFlag,
};

pub const VIDEOS: Endpoint = Endpoint {
    path: "/api/videos",
    label: "videos",
    envelope: Envelope::SuccessFlag,
};

pub const COURSES: Endpoint = Endpoint {
    path: "/api/courses",
    label: "courses",
    envelope: Envelope::StatusCode,
};

pub const CONTACT_SUBMIT: &str = "/api/contact/submit";
pub const APPLICATION_LOOKUP: &str = "/api/serviceApplications/admin/application";
