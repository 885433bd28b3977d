use url::Url;

const ID_LEN: usize = 11;

fn is_video_id(candidate: &str) -> bool {
    candidate.len() == ID_LEN
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Extract the 11-character video ID from the link formats editors paste
/// into the CMS: watch pages, short links, embeds and shorts.
pub fn video_id(link: &str) -> Option<String> {
    let link = link.trim();
    if is_video_id(link) {
        return Some(link.to_string());
    }

    let with_scheme = if link.contains("://") {
        link.to_string()
    } else {
        format!("https://{}", link)
    };
    let url = Url::parse(&with_scheme).ok()?;
    let host = url.host_str()?.trim_start_matches("www.").trim_start_matches("m.");
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());

    let candidate = match host {
        "youtu.be" => segments.next().map(str::to_string),
        "youtube.com" | "youtube-nocookie.com" | "music.youtube.com" => match segments.next() {
            Some("watch") => url
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned()),
            Some("embed") | Some("shorts") | Some("v") | Some("live") => segments.next().map(str::to_string),
            _ => None,
        },
        _ => None,
    }?;

    is_video_id(&candidate).then_some(candidate)
}

pub fn embed_url(link: &str) -> Option<String> {
    video_id(link).map(|id| format!("https://www.youtube.com/embed/{}", id))
}

pub fn thumbnail_url(link: &str) -> Option<String> {
    video_id(link).map(|id| format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn recognises_common_link_shapes() {
        for link in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=42",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?si=abc",
            "youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?rel=0",
            "dQw4w9WgXcQ",
        ] {
            assert_eq!(video_id(link).as_deref(), Some(ID), "{link}");
        }
    }

    #[test]
    fn rejects_other_hosts_and_bad_ids() {
        for link in [
            "",
            "https://vimeo.com/123456789",
            "https://www.youtube.com/channel/UC123",
            "https://www.youtube.com/watch?v=short",
            "https://youtu.be/",
            "not a url at all",
        ] {
            assert_eq!(video_id(link), None, "{link}");
        }
    }

    #[test]
    fn builds_embed_and_thumbnail() {
        assert_eq!(
            embed_url("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
        assert_eq!(
            thumbnail_url("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
    }
}
