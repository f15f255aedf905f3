// src/gui/router.rs
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::rankings::PAGE,
    &pages::reviews::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_at(idx: usize) -> &'static dyn Page {
    PAGES.get(idx).copied().unwrap_or(&pages::rankings::PAGE)
}

pub fn index_of(title: &str) -> Option<usize> {
    PAGES.iter().position(|p| p.title() == title)
}
