//! Static Icon Catalog
//!
//! The outline icon set a list can reference by name. Lookup and search
//! are pure functions over a static table; nothing here touches the
//! store.

use serde::Serialize;

/// One catalog entry: the name persisted in `lists.icon_name` and the
/// SVG path data the view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconDef {
    pub name: &'static str,
    pub data: &'static str,
}

/// The outline set offered by the icon picker
pub const OUTLINE_ICONS: &[IconDef] = &[
    IconDef { name: "airplane", data: "M407 64l-96 128H176l-64 48 96 32-48 96 32 32 96-48 32 96 48-64V176l128-96z" },
    IconDef { name: "basket", data: "M80 176l64-96h224l64 96M48 176h416l-40 256H88z" },
    IconDef { name: "book", data: "M256 96c-48-32-112-32-160-16v336c48-16 112-16 160 16 48-32 112-32 160-16V80c-48-16-112-16-160 16z" },
    IconDef { name: "briefcase", data: "M176 128V96a32 32 0 0132-32h96a32 32 0 0132 32v32M48 160h416v256H48z" },
    IconDef { name: "cafe", data: "M96 128h256v160a96 96 0 01-96 96h-64a96 96 0 01-96-96zm256 32h48a48 48 0 010 96h-48" },
    IconDef { name: "car", data: "M96 256l32-96h256l32 96v128h-48v-48H144v48H96zM144 304h16m192 0h16" },
    IconDef { name: "cart", data: "M80 96h48l64 256h224l48-192H160M208 416a16 16 0 11-32 0m256 0a16 16 0 11-32 0" },
    IconDef { name: "fitness", data: "M96 224v64m64-112v160m192-160v160m64-112v64M160 256h192" },
    IconDef { name: "gift", data: "M96 192h320v64H96zm32 64h256v192H128zm128-64v256m0-256c-32-64-128-64-128-16s96 16 128 16c32 0 128 32 128-16s-96-48-128 16z" },
    IconDef { name: "heart", data: "M256 448S64 320 64 192a96 96 0 01192-16 96 96 0 01192 16c0 128-192 256-192 256z" },
    IconDef { name: "home", data: "M80 224L256 80l176 144v208H288v-96h-64v96H80z" },
    IconDef { name: "list", data: "M160 144h272M160 256h272M160 368h272M96 144h0m0 112h0m0 112h0" },
    IconDef { name: "medkit", data: "M176 112a32 32 0 0132-32h96a32 32 0 0132 32v16H176zM64 128h384v320H64zm192 64v192m-96-96h192" },
    IconDef { name: "musical-notes", data: "M192 416V144l256-64v272m-256 64a48 48 0 11-96 0 48 48 0 0196 0zm256-64a48 48 0 11-96 0 48 48 0 0196 0z" },
    IconDef { name: "paw", data: "M256 448c-64 0-128-32-128-80s64-112 128-112 128 64 128 112-64 80-128 80zM144 208a32 40 0 110-64 32 40 0 010 64zm224 0a32 40 0 110-64 32 40 0 010 64z" },
    IconDef { name: "pricetag", data: "M288 64L64 288l160 160L448 224V64zm80 112a32 32 0 110-64 32 32 0 010 64z" },
    IconDef { name: "school", data: "M32 192L256 96l224 96-224 96zm96 80v96c0 32 64 64 128 64s128-32 128-64v-96" },
    IconDef { name: "star", data: "M256 80l55 112 123 18-89 87 21 123-110-58-110 58 21-123-89-87 123-18z" },
    IconDef { name: "trash", data: "M112 144h288l-24 304H136zm48-48h192v48H160zM96 144h320" },
    IconDef { name: "water", data: "M256 64S112 224 112 336a144 144 0 00288 0C400 224 256 64 256 64z" },
];

/// Static lookup by the name stored on a list. No side effects.
pub fn get_icon_data(name: &str) -> Option<&'static IconDef> {
    OUTLINE_ICONS.iter().find(|icon| icon.name == name)
}

/// Case-insensitive substring filter over the catalog, as used by the
/// icon picker's search bar.
pub fn search(query: &str) -> Vec<&'static IconDef> {
    let query = query.trim().to_lowercase();
    OUTLINE_ICONS
        .iter()
        .filter(|icon| icon.name.contains(&query))
        .collect()
}
