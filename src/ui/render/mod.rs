mod all;
mod confirm;
mod footer;
mod form;
mod header;
mod log;
mod table;
mod tabs;

use self::log::log;
use super::*;
use confirm::delete_confirmation;
use footer::footer;
use form::form;
use header::header;
use table::table;
use tabs::tabs;

pub use all::all as render;
