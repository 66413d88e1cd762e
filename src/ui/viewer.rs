// SPDX-License-Identifier: MPL-2.0
//! Viewer session orchestrating the screen state.
//!
//! A [`Viewer`] owns the zoom/pan controller, the page selector and the
//! drawer of one displayed screen. The host feeds it [`Message`]s in the order
//! its gesture engine delivers them and reacts to the returned [`Effect`], or
//! listens to [`Snapshot`]s through [`Viewer::subscribe`].
//!
//! ```text
//! Viewer (orchestrator)
//!     ├── zoom_pan       - Transform of the displayed image
//!     ├── page_selector  - Active page of the catalog
//!     ├── drawer         - Thumbnail drawer open/closed
//!     └── action_log     - Diagnostics of handled actions
//! ```

use crate::application::port::{assets, AssetResolver, ResolvedPage};
use crate::config::Config;
use crate::diagnostics::{ActionLog, UserAction};
use crate::domain::{Offset, Page, PageId, PageList, Transform, ZoomLimits};
use crate::error::Result;
use crate::ui::animation::Animation;
use crate::ui::info_panel::InfoPanel;
use crate::ui::state::{DrawerState, PageSelector, TransformUpdate, ZoomPanController};
use tokio::sync::watch;

/// Events the host delivers to the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    DoubleTap,
    /// Total translation of the drag in progress.
    DragChanged(Offset),
    DragEnded,
    /// Cumulative magnification of the pinch in progress.
    PinchChanged(f32),
    PinchEnded,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ToggleDrawer,
    /// A thumbnail was tapped.
    SelectPage(PageId),
}

/// Effects produced by handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing to re-render.
    None,
    /// The image transform changed.
    TransformChanged(TransformUpdate),
    /// The drawer slid open or closed; `thumbnails` drives the fade of its
    /// contents.
    DrawerToggled {
        open: bool,
        animation: Animation,
        thumbnails: Animation,
    },
    /// A different page is now displayed, with its zoom reset.
    PageChanged {
        page: PageId,
        update: TransformUpdate,
    },
    /// The host asked for a page outside the catalog; nothing changed.
    InvalidPage(PageId),
}

/// Everything the host needs to render the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub transform: Transform,
    pub active_page: Page,
    pub drawer_open: bool,
}

/// One view session of the pinch & zoom screen.
#[derive(Debug)]
pub struct Viewer {
    zoom_pan: ZoomPanController,
    page_selector: PageSelector,
    drawer: DrawerState,
    action_log: ActionLog,
    snapshots: watch::Sender<Snapshot>,
}

impl Viewer {
    /// Creates a session showing the first page at rest.
    #[must_use]
    pub fn new(pages: PageList, limits: ZoomLimits) -> Self {
        let zoom_pan = ZoomPanController::new(limits);
        let page_selector = PageSelector::new(pages);
        let drawer = DrawerState::default();
        let initial = Snapshot {
            transform: zoom_pan.transform(),
            active_page: page_selector.pages().first().clone(),
            drawer_open: drawer.is_open(),
        };
        let (snapshots, _) = watch::channel(initial);

        Self {
            zoom_pan,
            page_selector,
            drawer,
            action_log: ActionLog::default(),
            snapshots,
        }
    }

    /// Creates a session from the configured catalog and zoom limits.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.page_list()?, config.zoom_limits()))
    }

    /// Handle a viewer message.
    ///
    /// Note: Takes `Message` by value following the TEA `update(message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        let effect = match msg {
            Message::DoubleTap => {
                let update = self.zoom_pan.on_double_tap();
                self.record(UserAction::DoubleTap);
                transform_effect(update)
            }
            Message::DragChanged(translation) => {
                let update = self.zoom_pan.on_drag_changed(translation);
                self.record(UserAction::DragChanged {
                    x: translation.x,
                    y: translation.y,
                });
                transform_effect(update)
            }
            Message::DragEnded => {
                let update = self.zoom_pan.on_drag_ended();
                self.record(UserAction::DragEnded);
                transform_effect(update)
            }
            Message::PinchChanged(magnification) => {
                let update = self.zoom_pan.on_pinch_changed(magnification);
                self.record(UserAction::PinchChanged { magnification });
                transform_effect(update)
            }
            Message::PinchEnded => {
                let update = self.zoom_pan.on_pinch_ended();
                self.record(UserAction::PinchEnded);
                transform_effect(update)
            }
            Message::ZoomIn => {
                let update = self.zoom_pan.on_zoom_in_button();
                self.record(UserAction::ZoomIn);
                transform_effect(update)
            }
            Message::ZoomOut => {
                let update = self.zoom_pan.on_zoom_out_button();
                self.record(UserAction::ZoomOut);
                transform_effect(update)
            }
            Message::ZoomReset => {
                let update = self.zoom_pan.on_zoom_reset_button();
                self.record(UserAction::ResetZoom);
                transform_effect(update)
            }
            Message::ToggleDrawer => {
                let open = self.drawer.toggle();
                self.record(UserAction::ToggleDrawer);
                Effect::DrawerToggled {
                    open,
                    animation: Animation::drawer_slide(),
                    thumbnails: Animation::thumbnail_fade(),
                }
            }
            Message::SelectPage(id) => self.select_page(id),
        };

        if !matches!(effect, Effect::None | Effect::InvalidPage(_)) {
            self.publish();
        }
        effect
    }

    fn select_page(&mut self, id: PageId) -> Effect {
        let accepted = self.page_selector.select_page(id).is_ok();
        let effect = if accepted {
            let update = self.zoom_pan.on_page_activated();
            tracing::debug!(page = %id, "page activated");
            Effect::PageChanged { page: id, update }
        } else {
            Effect::InvalidPage(id)
        };
        self.record(UserAction::SelectPage {
            page: id.get(),
            accepted,
        });
        effect
    }

    fn record(&mut self, action: UserAction) {
        self.action_log.record(action, self.zoom_pan.scale());
    }

    fn publish(&self) {
        if let Ok(snapshot) = self.snapshot() {
            self.snapshots.send_replace(snapshot);
        }
    }

    /// Returns a receiver that observes a new [`Snapshot`] after every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }

    /// Current render state.
    pub fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            transform: self.zoom_pan.transform(),
            active_page: self.page_selector.current_page()?.clone(),
            drawer_open: self.drawer.is_open(),
        })
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.zoom_pan.transform()
    }

    pub fn current_page(&self) -> Result<&Page> {
        self.page_selector.current_page()
    }

    #[must_use]
    pub fn pages(&self) -> &PageList {
        self.page_selector.pages()
    }

    #[must_use]
    pub fn zoom_pan(&self) -> &ZoomPanController {
        &self.zoom_pan
    }

    #[must_use]
    pub fn drawer(&self) -> DrawerState {
        self.drawer
    }

    #[must_use]
    pub fn info_panel(&self) -> InfoPanel {
        InfoPanel::from_transform(&self.zoom_pan.transform())
    }

    #[must_use]
    pub fn diagnostics(&self) -> &ActionLog {
        &self.action_log
    }

    /// Resolves the full-size image of the active page.
    pub fn resolve_current<R: AssetResolver>(&self, resolver: &R) -> Result<Option<R::Image>> {
        Ok(resolver.resolve_image(self.current_page()?))
    }

    /// Resolves every drawer thumbnail, in display order.
    pub fn resolve_thumbnails<'a, R: AssetResolver>(
        &'a self,
        resolver: &R,
    ) -> Vec<ResolvedPage<'a, R::Image>> {
        assets::resolve_thumbnails(self.pages(), resolver)
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(PageList::default(), ZoomLimits::default())
    }
}

fn transform_effect(update: TransformUpdate) -> Effect {
    if update.changed {
        Effect::TransformChanged(update)
    } else {
        Effect::None
    }
}
