//! Single-thumbnail download pipeline.
//!
//! The worker operates on a value-type [`ThumbnailJob`] and cloned
//! [`WorkerDeps`], with no access to the runner's queue. Every failure is
//! logged where it happens and returned; nothing here aborts sibling jobs.

use std::path::PathBuf;

use tubethumbs_core::{
    FetchResponse, PageFetcher, RequestHeaders, SiteUrls, VideoId, extract_branded_title,
};

use crate::error::{FetchStage, ThumbnailError};
use crate::paths::ThumbnailDestination;

/// Dependencies shared by all jobs of a run.
#[derive(Debug, Clone)]
pub struct WorkerDeps {
    /// Watch-page and thumbnail URL templates.
    pub urls: SiteUrls,
    /// Headers sent with both requests.
    pub headers: RequestHeaders,
}

/// One video to download into one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailJob {
    pub video_id: VideoId,
    /// Playlist folder; must already exist.
    pub folder: PathBuf,
}

impl ThumbnailJob {
    pub fn new(video_id: VideoId, folder: impl Into<PathBuf>) -> Self {
        Self {
            video_id,
            folder: folder.into(),
        }
    }
}

/// A thumbnail written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedThumbnail {
    pub video_id: VideoId,
    /// Video title as shown on its page.
    pub title: String,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Download the thumbnail of `job.video_id` into `job.folder`.
///
/// 1. Fetch the watch page; bail on transport failure or a non-200 status.
/// 2. Extract the title; bail if the page has no branded title.
/// 3. Fetch the highest-resolution thumbnail; bail as in step 1.
/// 4. Write the bytes to `<folder>/<sanitized title>.jpg`, replacing any
///    existing file.
pub async fn download_thumbnail(
    fetcher: &dyn PageFetcher,
    job: &ThumbnailJob,
    deps: &WorkerDeps,
) -> Result<SavedThumbnail, ThumbnailError> {
    let page_url = deps.urls.watch_url(&job.video_id);
    let page = fetch_ok(fetcher, &page_url, job, deps, FetchStage::Page).await?;

    let Some(title) = extract_branded_title(&page.text()) else {
        tracing::error!(video_id = %job.video_id, url = %page_url, "Could not find video title");
        return Err(ThumbnailError::MissingTitle {
            video_id: job.video_id.clone(),
        });
    };

    let destination = ThumbnailDestination::plan(&job.folder, &title, &job.video_id);

    let image_url = deps.urls.thumbnail_url(&job.video_id);
    let image = fetch_ok(fetcher, &image_url, job, deps, FetchStage::Thumbnail).await?;

    let path = destination.path();
    if let Err(source) = tokio::fs::write(&path, &image.body).await {
        tracing::error!(
            video_id = %job.video_id,
            path = %path.display(),
            error = %source,
            "Failed to write thumbnail"
        );
        return Err(ThumbnailError::Write {
            video_id: job.video_id.clone(),
            path,
            source,
        });
    }

    tracing::info!(video_id = %job.video_id, path = %path.display(), "Saved thumbnail");

    Ok(SavedThumbnail {
        video_id: job.video_id.clone(),
        title,
        path,
        bytes: image.body.len(),
    })
}

/// Fetch `url`, turning transport failures and non-200 statuses into errors.
async fn fetch_ok(
    fetcher: &dyn PageFetcher,
    url: &str,
    job: &ThumbnailJob,
    deps: &WorkerDeps,
    stage: FetchStage,
) -> Result<FetchResponse, ThumbnailError> {
    let response = match fetcher.fetch(url, &deps.headers).await {
        Ok(response) => response,
        Err(source) => {
            tracing::error!(video_id = %job.video_id, %stage, error = %source, "Request failed");
            return Err(ThumbnailError::Fetch {
                video_id: job.video_id.clone(),
                stage,
                source,
            });
        }
    };

    if !response.is_ok() {
        tracing::error!(
            video_id = %job.video_id,
            %stage,
            status = response.status,
            url,
            "Unexpected HTTP status"
        );
        return Err(ThumbnailError::Status {
            video_id: job.video_id.clone(),
            stage,
            status: response.status,
        });
    }

    tracing::debug!(video_id = %job.video_id, %stage, bytes = response.body.len(), "Fetched");
    Ok(response)
}
