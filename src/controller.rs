//! Query submission flow
//!
//! [`QueryController`] ties the pieces together: it validates the query text,
//! sends it over a [`QueryTransport`], hands the answer to the
//! [`ResponsePresenter`] and the [`MapRenderer`], then scrolls the map into view.
//! Every failure ends in the same user-visible message; nothing propagates
//! out of [`QueryController::submit`].

use crate::{
    animation::{clock::FrameClock, scroll::Animator},
    client::{
        model::{QueryRequest, QueryResponse},
        transport::QueryTransport,
    },
    core::config::{GeoQueryConfig, MessageConfig},
    page::{ElementId, PageSurface, TextRegion},
    render::{presenter::ResponsePresenter, renderer::MapRenderer},
    sync::lock,
    Result,
};
use std::sync::{Arc, Mutex};

/// What a single submission ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank query; the user was alerted and nothing was sent
    Rejected,
    Rendered,
    /// The failure message replaced the response text
    Failed,
}

/// Shows the loading indicator for as long as it is alive
struct LoadingGuard<'a, P: PageSurface> {
    page: &'a Mutex<P>,
}

impl<'a, P: PageSurface> LoadingGuard<'a, P> {
    fn show(page: &'a Mutex<P>) -> Self {
        lock(page).set_loading(true);
        Self { page }
    }
}

impl<P: PageSurface> Drop for LoadingGuard<'_, P> {
    fn drop(&mut self) {
        lock(self.page).set_loading(false);
    }
}

pub struct QueryController<P: PageSurface> {
    page: Arc<Mutex<P>>,
    renderer: Arc<Mutex<MapRenderer>>,
    transport: Arc<dyn QueryTransport>,
    animator: Animator,
    clock: Arc<dyn FrameClock>,
    messages: MessageConfig,
}

impl<P: PageSurface> QueryController<P> {
    /// Builds a controller with a fresh map
    pub fn new(
        config: &GeoQueryConfig,
        page: Arc<Mutex<P>>,
        transport: Arc<dyn QueryTransport>,
        clock: Arc<dyn FrameClock>,
    ) -> Result<Self> {
        let renderer = Arc::new(Mutex::new(MapRenderer::initialize(config)?));
        Ok(Self::with_renderer(config, page, renderer, transport, clock))
    }

    pub fn with_renderer(
        config: &GeoQueryConfig,
        page: Arc<Mutex<P>>,
        renderer: Arc<Mutex<MapRenderer>>,
        transport: Arc<dyn QueryTransport>,
        clock: Arc<dyn FrameClock>,
    ) -> Self {
        Self {
            page,
            renderer,
            transport,
            animator: Animator::from_config(&config.scroll),
            clock,
            messages: config.messages.clone(),
        }
    }

    pub fn page(&self) -> &Arc<Mutex<P>> {
        &self.page
    }

    pub fn renderer(&self) -> &Arc<Mutex<MapRenderer>> {
        &self.renderer
    }

    /// Key press in the query input. Only Enter submits.
    pub async fn handle_key(&self, key: &str) -> Option<SubmitOutcome> {
        if key == "Enter" {
            Some(self.submit().await)
        } else {
            None
        }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let query = lock(&self.page).query_text();
        let query = query.trim();
        if query.is_empty() {
            lock(&self.page).alert(&self.messages.validation);
            return SubmitOutcome::Rejected;
        }

        let loading = LoadingGuard::show(&self.page);
        let result = self.transport.send(&QueryRequest::new(query)).await;
        let result = result.and_then(|response| self.apply(&response));
        drop(loading);

        match result {
            Ok(()) => {
                if let Err(e) = self
                    .animator
                    .scroll_to(&*self.page, ElementId::MapSection, self.clock.as_ref())
                    .await
                {
                    log::warn!("could not scroll to the map: {}", e);
                }
                SubmitOutcome::Rendered
            }
            Err(e) => {
                log::error!("query failed: {}", e);
                lock(&self.page).set_text(TextRegion::QueryResponse, &self.messages.failure);
                SubmitOutcome::Failed
            }
        }
    }

    fn apply(&self, response: &QueryResponse) -> Result<()> {
        if let Some(intent) = &response.intent {
            log::debug!("query intent: {}", intent);
        }
        ResponsePresenter::present(&mut *lock(&self.page), response);
        lock(&self.renderer).render(&response.map_data)
    }
}
