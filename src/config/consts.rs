// src/config/consts.rs

// Net config
pub const HOST: &str = "www.dmm.com";
pub const GADGET_PATH: &str = "/netgame/social/-/gadgets/=/app_id=";

// Cookie flag DMM sets for the Japan region; absence is advisory, not fatal
pub const REGION_FLAG: &str = "ccky=1";

// File server
pub const DEFAULT_PORT: u16 = 80;
pub const INDEX_FILE: &str = "index.html";
pub const MAIN_MOVIE: &str = "mainD2.swf";
