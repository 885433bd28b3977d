use yew::prelude::*;

use crate::components::load_state::LoadState;
use crate::fetch::endpoints::{GALLERY_ROUTES, VIDEOS};
use crate::fetch::hooks::use_collection;
use crate::models::{map_gallery_route, map_video, Video};
use crate::utils::youtube;

#[derive(Properties, PartialEq)]
struct VideoCardProps {
    video: Video,
}

/// Shows the thumbnail until clicked, then swaps in the embedded player.
#[function_component(VideoCard)]
fn video_card(props: &VideoCardProps) -> Html {
    let playing = use_state(|| false);
    let video = &props.video;

    let (Some(embed), Some(thumbnail)) = (
        youtube::embed_url(&video.youtube_url),
        youtube::thumbnail_url(&video.youtube_url),
    ) else {
        log::warn!("Skipping video {} with unrecognised link {}", video.id, video.youtube_url);
        return html! {};
    };

    let play = {
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| playing.set(true))
    };

    html! {
        <div class="video-card">
            if *playing {
                <iframe
                    src={format!("{}?autoplay=1", embed)}
                    title={video.title.clone()}
                    allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                />
            } else {
                <button class="video-thumb" onclick={play}>
                    <img src={thumbnail} alt={video.title.clone()} loading="lazy" />
                    <span class="play-icon">{"▶"}</span>
                </button>
            }
            <h3>{ &video.title }</h3>
        </div>
    }
}

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    let routes = use_collection(GALLERY_ROUTES, map_gallery_route);
    let videos = use_collection(VIDEOS, map_video);
    let selected = use_state(|| None::<String>);

    let active = (*selected)
        .clone()
        .or_else(|| routes.data.first().map(|r| r.id.clone()));

    html! {
        <div class="gallery-page">
            <section class="page-hero">
                <h1>{"Gallery"}</h1>
                <p>{"Moments from our events, seminars and client meets"}</p>
            </section>

            <section class="gallery-section">
                <LoadState loading={routes.loading} error={routes.error.clone()}>
                    <div class="gallery-tabs">
                        { for routes.data.iter().map(|r| {
                            let id = r.id.clone();
                            let onclick = {
                                let selected = selected.clone();
                                Callback::from(move |_: MouseEvent| selected.set(Some(id.clone())))
                            };
                            let is_active = active.as_deref() == Some(r.id.as_str());
                            html! {
                                <button class={classes!("gallery-tab", is_active.then_some("active"))} {onclick}>
                                    { &r.title }
                                </button>
                            }
                        }) }
                    </div>
                    <div class="gallery-grid">
                        { for routes.data
                            .iter()
                            .filter(|r| active.as_deref() == Some(r.id.as_str()))
                            .flat_map(|r| r.images.iter().map(move |src| (r, src)))
                            .map(|(r, src)| html! { <img src={src.clone()} alt={r.title.clone()} loading="lazy" /> }) }
                    </div>
                </LoadState>
            </section>

            <section class="videos-section">
                <h2>{"Videos"}</h2>
                <LoadState loading={videos.loading} error={videos.error.clone()}>
                    <div class="videos-grid">
                        { for videos.data.iter().map(|v| html! { <VideoCard key={v.id.clone()} video={v.clone()} /> }) }
                    </div>
                </LoadState>
            </section>
        </div>
    }
}
