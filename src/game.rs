// src/game.rs
//! The abstract DMM game. Concrete games plug in an application id and an
//! optional preload step; `start` runs the fetch → extract → preload
//! pipeline, strictly sequential, first error wins.

use crate::account::Account;
use crate::config::consts::{GADGET_PATH, HOST};
use crate::core::net::{self, NetError};
use crate::error::GameError;
use crate::specs::gadget::{self, GadgetInfo};

/// What a concrete game must supply.
///
/// `app_id` has no default on purpose: a game without an id cannot build a
/// valid gadget URL, so the requirement sits at the type level instead of a
/// warn-and-continue stub.
pub trait GameSpec {
    /// DMM application id of the game.
    fn app_id(&self) -> u32;

    /// Hook between metadata fetch and completion. Default: pass through.
    fn preload(&self, info: GadgetInfo) -> Result<GadgetInfo, GameError> {
        Ok(info)
    }
}

/// HTTP GET seam. Tests substitute a canned page or a failing transport.
pub trait Fetch {
    fn get(&self, url: &str, cookie: &str) -> Result<String, NetError>;
}

/// Production fetcher over `core::net`.
pub struct HttpFetch;

impl Fetch for HttpFetch {
    fn get(&self, url: &str, cookie: &str) -> Result<String, NetError> {
        net::http_get(url, Some(cookie))
    }
}

/// One logical game tied to one account.
///
/// A session runs one pipeline at a time; callers wanting parallelism use
/// separate sessions. No retries, no caching, no cancellation — the network
/// timeouts in `core::net` are the only guard.
pub struct GameSession<S: GameSpec> {
    account: Account,
    spec: S,
}

impl<S: GameSpec> GameSession<S> {
    pub fn new(account: Account, spec: S) -> Self {
        logd!("create game session");
        Self { account, spec }
    }

    /// Gadget page URL for this game.
    pub fn url(&self) -> String {
        format!("http://{HOST}{GADGET_PATH}{}", self.spec.app_id())
    }

    /// Run the full pipeline and hand back the (possibly preloaded) gadget
    /// info. Preload never sees a failed fetch or extraction.
    pub fn start(&self) -> Result<GadgetInfo, GameError> {
        self.start_with(&HttpFetch)
    }

    pub fn start_with(&self, fetch: &dyn Fetch) -> Result<GadgetInfo, GameError> {
        logf!("start the game (DMM game id: {})", self.spec.app_id());
        let info = self.fetch_app_info(fetch)?;
        self.spec.preload(info)
    }

    fn fetch_app_info(&self, fetch: &dyn Fetch) -> Result<GadgetInfo, GameError> {
        logd!("get game metadata");
        let url = self.url();
        let cookie = self.account.cookie_header();

        // Advisory only; the request goes out either way.
        if !self.account.has_region_flag() {
            logw!("Japan cookie region not set. DMM may reject the access");
        }

        logf!("request page {url}");
        let body = fetch.get(&url, &cookie)?;
        logf!("response received from {url}");

        match gadget::extract(&body)? {
            Some(info) => Ok(info),
            None => {
                loge!("gadget info not found");
                Err(GameError::InfoNotFound)
            }
        }
    }
}
