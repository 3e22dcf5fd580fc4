//! Renders the data-driven parts of the page (leaderboard rows, photo and
//! project cards, menu links) into the host markup before sections mount.

use crate::constants::{
    ITEM_ID_ATTR, JOURNEY_GRID_ID, LEADERBOARD_ROWS_ID, NAV_MENU_LINKS, NAV_MENU_LINKS_ID,
    PROJECTS_GRID_ID, RUNNER_ID_ATTR,
};
use crate::content::{PHOTOS, PROJECTS, RUNNERS};
use temcy_core::content::{distance_label, rank_label, GalleryItem, ProjectItem, RunnerRow};
use web_sys as web;

fn el(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let e = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    e.set_class_name(class);
    Ok(e)
}

fn text(document: &web::Document, tag: &str, class: &str, body: &str) -> anyhow::Result<web::Element> {
    let e = el(document, tag, class)?;
    e.set_text_content(Some(body));
    Ok(e)
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Replace the children of `#id` with `build(item)` for every item.
fn fill<T>(
    document: &web::Document,
    id: &str,
    items: &[T],
    build: impl Fn(&web::Document, usize, &T) -> anyhow::Result<web::Element>,
) -> anyhow::Result<usize> {
    let Some(parent) = document.get_element_by_id(id) else {
        log::warn!("[ui] missing #{}", id);
        return Ok(0);
    };
    parent.set_inner_html("");
    for (i, item) in items.iter().enumerate() {
        append(&parent, &build(document, i, item)?)?;
    }
    Ok(items.len())
}

fn runner_row(document: &web::Document, index: usize, runner: &RunnerRow) -> anyhow::Result<web::Element> {
    let row = el(document, "div", "runner-row")?;
    _ = row.set_attribute(RUNNER_ID_ATTR, runner.id);
    append(&row, &text(document, "span", "runner-rank", &rank_label(index))?)?;
    append(&row, &text(document, "span", "runner-name", runner.name)?)?;
    append(
        &row,
        &text(document, "span", "runner-distance", &format!("{} KM", distance_label(runner.distance_km)))?,
    )?;
    append(
        &row,
        &text(document, "span", "runner-elevation", &format!("{} M", runner.elevation_m))?,
    )?;
    let status = runner.status();
    append(
        &row,
        &text(document, "span", &format!("runner-status {}", status.css_class()), status.label())?,
    )?;
    Ok(row)
}

fn photo_card(document: &web::Document, _: usize, photo: &GalleryItem) -> anyhow::Result<web::Element> {
    let card = el(document, "figure", "gallery-card")?;
    _ = card.set_attribute(ITEM_ID_ATTR, &photo.id.to_string());
    _ = card.set_attribute("style", &photo.shape.css());
    let img = el(document, "img", "gallery-image")?;
    _ = img.set_attribute("src", photo.image);
    _ = img.set_attribute("alt", photo.category);
    _ = img.set_attribute("loading", "lazy");
    append(&card, &img)?;
    append(&card, &text(document, "figcaption", "gallery-caption", &photo.caption())?)?;
    Ok(card)
}

fn project_card(document: &web::Document, _: usize, project: &ProjectItem) -> anyhow::Result<web::Element> {
    let card = el(document, "article", "project-card")?;
    _ = card.set_attribute(ITEM_ID_ATTR, &project.id.to_string());
    _ = card.set_attribute("style", &project.shape.css());
    if let Some(src) = project.image {
        let img = el(document, "img", "project-image")?;
        _ = img.set_attribute("src", src);
        _ = img.set_attribute("alt", project.title);
        append(&card, &img)?;
    }
    append(&card, &text(document, "span", "project-stat", project.stat)?)?;
    append(&card, &text(document, "h3", "project-title", project.title)?)?;
    append(&card, &text(document, "p", "project-description", project.description)?)?;
    if let Some(href) = project.href {
        let link = text(document, "a", "project-link", "VIEW")?;
        _ = link.set_attribute("href", href);
        append(&card, &link)?;
    }
    Ok(card)
}

fn menu_link(document: &web::Document, _: usize, link: &(&str, &str)) -> anyhow::Result<web::Element> {
    let a = text(document, "a", "nav-menu-link", link.0)?;
    _ = a.set_attribute("href", link.1);
    Ok(a)
}

/// Populate the page from the static content.
pub fn render_content(document: &web::Document) -> anyhow::Result<()> {
    let rows = fill(document, LEADERBOARD_ROWS_ID, &RUNNERS, runner_row)?;
    let photos = fill(document, JOURNEY_GRID_ID, &PHOTOS, photo_card)?;
    let cards = fill(document, PROJECTS_GRID_ID, &PROJECTS, project_card)?;
    fill(document, NAV_MENU_LINKS_ID, &NAV_MENU_LINKS, menu_link)?;
    log::info!("[ui] rendered {} runners, {} photos, {} projects", rows, photos, cards);
    Ok(())
}
