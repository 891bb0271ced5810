//! Camera Dialog Component
//!
//! Live preview from the device camera; capturing grabs a single still
//! frame as a JPEG data URL and hands it to the parent.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamTrack};

use super::modal::Modal;

/// Guard around an active capture device. Dropping it stops every
/// track, so the camera cannot stay on without a live handle.
struct CameraStream(MediaStream);

impl CameraStream {
    fn new(stream: MediaStream) -> Self {
        Self(stream)
    }

    fn raw(&self) -> &MediaStream {
        &self.0
    }

    fn stop(&self) {
        for track in self.0.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

impl Drop for CameraStream {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn acquire_stream() -> Result<CameraStream, String> {
    let window = web_sys::window().ok_or_else(|| "אין חלון פעיל".to_string())?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| "המצלמה אינה זמינה".to_string())?;

    let constraints = web_sys::MediaStreamConstraints::new();
    let video = js_sys::Object::new();
    js_sys::Reflect::set(&video, &"facingMode".into(), &"environment".into())
        .map_err(|_| "המצלמה אינה זמינה".to_string())?;
    constraints.set_video(&video.into());

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|_| "המצלמה אינה זמינה".to_string())?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|_| "הגישה למצלמה נדחתה".to_string())?;
    let stream: MediaStream = stream
        .dyn_into()
        .map_err(|_| "המצלמה אינה זמינה".to_string())?;

    Ok(CameraStream::new(stream))
}

fn capture_frame(video: &HtmlVideoElement) -> Result<String, String> {
    fn failed<E>(_: E) -> String {
        "צילום התמונה נכשל".to_string()
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "אין חלון פעיל".to_string())?;
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(failed)?
        .dyn_into()
        .map_err(failed)?;
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());

    let context: web_sys::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(failed)?
        .ok_or_else(|| "צילום התמונה נכשל".to_string())?
        .dyn_into()
        .map_err(failed)?;
    context
        .draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(failed)?;

    canvas.to_data_url_with_type("image/jpeg").map_err(failed)
}

/// Camera capture dialog.
///
/// The stream guard is released on capture, cancel, dialog dismissal
/// and component teardown; there is no exit path that leaves the
/// device active.
#[component]
pub fn CameraDialog(
    open: ReadSignal<bool>,
    #[prop(into)] on_capture: Callback<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let stream_handle: StoredValue<Option<CameraStream>> = StoredValue::new(None);
    let (camera_error, set_camera_error) = signal(None::<String>);

    let release_stream = move || {
        // dropping the guard stops the tracks
        stream_handle.update_value(|handle| {
            handle.take();
        });
        if let Some(video) = video_ref.get_untracked() {
            video.set_src_object(None);
        }
    };

    Effect::new(move |_| {
        if open.get() {
            set_camera_error.set(None);
            spawn_local(async move {
                match acquire_stream().await {
                    Ok(stream) => {
                        if !open.get_untracked() {
                            // dialog dismissed while waiting for permission;
                            // the guard drops here and stops the tracks
                            return;
                        }
                        if let Some(video) = video_ref.get_untracked() {
                            let _ = video.set_attribute("playsinline", "");
                            video.set_autoplay(true);
                            video.set_src_object(Some(stream.raw()));
                            let _ = video.play();
                        }
                        stream_handle.set_value(Some(stream));
                    }
                    Err(message) => set_camera_error.set(Some(message)),
                }
            });
        } else {
            release_stream();
        }
    });

    on_cleanup(release_stream);

    let capture = move |_| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        match capture_frame(&video) {
            Ok(data_url) => {
                release_stream();
                on_capture.run(data_url);
            }
            Err(message) => set_camera_error.set(Some(message)),
        }
    };

    view! {
        <Modal title="צלם תמונה" open=open on_close=on_close>
            <div class="camera-view">
                <video node_ref=video_ref></video>
            </div>
            {move || camera_error.get().map(|message| view! {
                <p class="inline-error">{message}</p>
            })}
            <div class="camera-actions">
                <button type="button" on:click=move |_| on_close.run(())>"ביטול"</button>
                <button type="button" class="primary" on:click=capture>"צלם"</button>
            </div>
        </Modal>
    }
}
