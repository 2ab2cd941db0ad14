use crate::AppState;

use super::{dtos::create_page_dto::CreatePageDto, models::page::Page};

pub async fn create_page(dto: &CreatePageDto, state: &AppState) -> Page {
    let page = Page::new(dto);

    state.pages.write().await.push(page.clone());

    page
}

pub async fn get_pages(state: &AppState) -> Vec<Page> {
    state.pages.read().await.clone()
}
