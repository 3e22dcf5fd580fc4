// Choreographies for every animated section of the page.
//
// Each `SectionPlan` pairs a choreography with the DOM nodes its target
// ids stand for. Staggered lists (leaderboard rows, project cards, menu
// links) map each item's own key to a target, in list order, so the stagger
// follows the data and never depends on element positions.

use crate::constants::{
    HERO_BIO_ID, HERO_ID, HERO_TITLE_LINE1_ID, HERO_TITLE_LINE2_ID, ITEM_ID_ATTR,
    JOURNEY_GRID_ID, JOURNEY_TITLE_ID, LEADERBOARD_CONTAINER_ID, LEADERBOARD_ROWS_ID,
    NAV_MENU_FOOTER_ID, NAV_MENU_LINKS_ID, PROJECTS_CONTAINER_ID, PROJECTS_GRID_ID,
    RUNNER_ID_ATTR,
};
use std::fmt;
use temcy_core::bridge::{Marker, OwnerId};
use temcy_core::choreo::{Choreography, SequenceTrigger};
use temcy_core::constants::HERO_SCRUB_SMOOTHING_SEC;
use temcy_core::content::{ProjectItem, RunnerRow};
use temcy_core::timeline::{Ease, Position, PropSet, TargetId, Timeline, TweenConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Text(&'static str),
    Num(u32),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKey::Text(s) => f.write_str(s),
            ItemKey::Num(n) => write!(f, "{}", n),
        }
    }
}

/// How a target id finds its element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    Id(&'static str),
    /// The child of `#list` whose `attr` equals `key`.
    Item {
        list: &'static str,
        attr: &'static str,
        key: ItemKey,
    },
}

impl Selector {
    /// CSS query for item selectors; plain ids go through `getElementById`.
    pub fn item_css(&self) -> Option<String> {
        match self {
            Selector::Id(_) => None,
            Selector::Item { list, attr, key } => Some(format!("#{} [{}=\"{}\"]", list, attr, key)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SectionPlan {
    pub owner: OwnerId,
    pub choreography: Choreography,
    pub bindings: Vec<(TargetId, Selector)>,
}

impl SectionPlan {
    pub fn selector(&self, target: TargetId) -> Option<Selector> {
        self.bindings
            .iter()
            .find(|(id, _)| *id == target)
            .map(|(_, sel)| *sel)
    }
}

pub const HERO_OWNER: OwnerId = 1;
pub const LEADERBOARD_OWNER: OwnerId = 2;
pub const JOURNEY_OWNER: OwnerId = 3;
pub const PROJECTS_OWNER: OwnerId = 4;
pub const NAV_MENU_OWNER: OwnerId = 5;

// Hero targets
pub const HERO_SECTION: TargetId = 1;
pub const HERO_TITLE_1: TargetId = 2;
pub const HERO_TITLE_2: TargetId = 3;
pub const HERO_BIO: TargetId = 4;

// Single-element targets of the other sections
pub const LEADERBOARD_CONTAINER: TargetId = 10;
pub const JOURNEY_TITLE: TargetId = 20;
pub const JOURNEY_GRID: TargetId = 21;
pub const PROJECTS_CONTAINER: TargetId = 30;
pub const PROJECTS_GRID: TargetId = 31;
pub const NAV_MENU_FOOTER: TargetId = 40;

// First target of each staggered list; item `i` is `base + i`.
pub const LEADERBOARD_ROW_BASE: TargetId = 100;
pub const PROJECT_CARD_BASE: TargetId = 200;
pub const NAV_LINK_BASE: TargetId = 300;

/// Ordered `item key -> target` mapping for a staggered list. Targets are
/// handed out from `base` in list order.
pub fn list_targets(
    base: TargetId,
    keys: impl IntoIterator<Item = ItemKey>,
) -> Vec<(ItemKey, TargetId)> {
    keys.into_iter().zip(base..).collect()
}

fn list_bindings(
    items: &[(ItemKey, TargetId)],
    list: &'static str,
    attr: &'static str,
) -> Vec<(TargetId, Selector)> {
    items
        .iter()
        .map(|&(key, id)| (id, Selector::Item { list, attr, key }))
        .collect()
}

fn ids(items: &[(ItemKey, TargetId)]) -> Vec<TargetId> {
    items.iter().map(|(_, id)| *id).collect()
}

/// Title lines rise in on load, then fly apart as the hero scrolls away.
pub fn hero() -> SectionPlan {
    let titles = [HERO_TITLE_1, HERO_TITLE_2];
    let intro = Timeline::new()
        .set(&[HERO_TITLE_1, HERO_TITLE_2, HERO_BIO], PropSet::new().y(100.0).opacity(0.0))
        .to(
            &titles,
            PropSet::new().y(0.0).opacity(1.0),
            TweenConfig::new(1.5, Ease::PowerOut(4)).stagger(0.2).delay(0.5),
            Position::Sequential,
        )
        .to(
            &[HERO_BIO],
            PropSet::new().y(0.0).opacity(1.0),
            TweenConfig::new(1.0, Ease::PowerOut(3)),
            Position::Offset(-1.0),
        );

    let scroll_out = Timeline::new()
        .to(
            &[HERO_TITLE_1],
            PropSet::new().x(-200.0).y(-100.0).opacity(0.0).scale(1.2),
            TweenConfig::new(0.5, Ease::PowerIn(1)),
            Position::At(0.0),
        )
        .to(
            &[HERO_TITLE_2],
            PropSet::new().x(200.0).y(100.0).opacity(0.0).scale(1.2),
            TweenConfig::new(0.5, Ease::PowerIn(1)),
            Position::At(0.0),
        )
        .to(
            &[HERO_BIO],
            PropSet::new().opacity(0.0).y(50.0),
            TweenConfig::new(0.5, Ease::default()),
            Position::At(0.0),
        );

    let choreography = Choreography::new("hero")
        .sequence(SequenceTrigger::Immediate { delay: 0.0 }, intro)
        .sequence(
            SequenceTrigger::Scrub {
                target: HERO_SECTION,
                start: Marker::TOP_TOP,
                end: Marker::BOTTOM_CENTER,
                smoothing: HERO_SCRUB_SMOOTHING_SEC,
            },
            scroll_out,
        );

    SectionPlan {
        owner: HERO_OWNER,
        choreography,
        bindings: vec![
            (HERO_SECTION, Selector::Id(HERO_ID)),
            (HERO_TITLE_1, Selector::Id(HERO_TITLE_LINE1_ID)),
            (HERO_TITLE_2, Selector::Id(HERO_TITLE_LINE2_ID)),
            (HERO_BIO, Selector::Id(HERO_BIO_ID)),
        ],
    }
}

/// Widget scales in, then rows slide in from the left one by one.
pub fn leaderboard(runners: &[RunnerRow]) -> SectionPlan {
    let rows = list_targets(LEADERBOARD_ROW_BASE, runners.iter().map(|r| ItemKey::Text(r.id)));
    let row_targets = ids(&rows);
    let container = Timeline::new().from_to(
        &[LEADERBOARD_CONTAINER],
        PropSet::new().opacity(0.0).scale(0.95),
        PropSet::new().opacity(1.0).scale(1.0),
        TweenConfig::new(0.8, Ease::PowerOut(3)),
        Position::At(0.0),
    );
    let row_in = Timeline::new().from_to(
        &row_targets,
        PropSet::new().opacity(0.0).x(-20.0),
        PropSet::new().opacity(1.0).x(0.0),
        TweenConfig::new(0.5, Ease::PowerOut(2)).stagger(0.1),
        Position::At(0.0),
    );

    let choreography = Choreography::new("leaderboard")
        .sequence(
            SequenceTrigger::OnEnter {
                target: LEADERBOARD_CONTAINER,
                start: Marker::top_at(0.8),
            },
            container,
        )
        .sequence(
            SequenceTrigger::OnEnter {
                target: LEADERBOARD_CONTAINER,
                start: Marker::top_at(0.7),
            },
            row_in,
        );

    let mut bindings = vec![(LEADERBOARD_CONTAINER, Selector::Id(LEADERBOARD_CONTAINER_ID))];
    bindings.extend(list_bindings(&rows, LEADERBOARD_ROWS_ID, RUNNER_ID_ATTR));
    SectionPlan {
        owner: LEADERBOARD_OWNER,
        choreography,
        bindings,
    }
}

/// Gallery title and grid fade up independently as each comes into view.
pub fn journey() -> SectionPlan {
    let title = Timeline::new().from_to(
        &[JOURNEY_TITLE],
        PropSet::new().opacity(0.0).y(30.0),
        PropSet::new().opacity(1.0).y(0.0),
        TweenConfig::new(0.8, Ease::default()),
        Position::At(0.0),
    );
    let grid = Timeline::new().from_to(
        &[JOURNEY_GRID],
        PropSet::new().opacity(0.0).y(50.0),
        PropSet::new().opacity(1.0).y(0.0),
        TweenConfig::new(1.0, Ease::PowerOut(3)),
        Position::At(0.0),
    );
    let choreography = Choreography::new("journey")
        .sequence(
            SequenceTrigger::OnEnter {
                target: JOURNEY_TITLE,
                start: Marker::top_at(0.8),
            },
            title,
        )
        .sequence(
            SequenceTrigger::OnEnter {
                target: JOURNEY_GRID,
                start: Marker::top_at(0.75),
            },
            grid,
        );
    SectionPlan {
        owner: JOURNEY_OWNER,
        choreography,
        bindings: vec![
            (JOURNEY_TITLE, Selector::Id(JOURNEY_TITLE_ID)),
            (JOURNEY_GRID, Selector::Id(JOURNEY_GRID_ID)),
        ],
    }
}

/// Bento container rises in, then its cards follow with a short stagger.
pub fn projects(items: &[ProjectItem]) -> SectionPlan {
    let cards = list_targets(PROJECT_CARD_BASE, items.iter().map(|p| ItemKey::Num(p.id)));
    let card_targets = ids(&cards);
    let container = Timeline::new().from_to(
        &[PROJECTS_CONTAINER],
        PropSet::new().opacity(0.0).y(50.0),
        PropSet::new().opacity(1.0).y(0.0),
        TweenConfig::new(1.0, Ease::PowerOut(3)),
        Position::At(0.0),
    );
    let card_in = Timeline::new().from_to(
        &card_targets,
        PropSet::new().opacity(0.0).y(50.0),
        PropSet::new().opacity(1.0).y(0.0),
        TweenConfig::new(0.8, Ease::PowerOut(3)).stagger(0.1),
        Position::At(0.0),
    );
    let choreography = Choreography::new("projects")
        .sequence(
            SequenceTrigger::OnEnter {
                target: PROJECTS_CONTAINER,
                start: Marker::top_at(0.9),
            },
            container,
        )
        .sequence(
            SequenceTrigger::OnEnter {
                target: PROJECTS_GRID,
                start: Marker::top_at(0.85),
            },
            card_in,
        );

    let mut bindings = vec![
        (PROJECTS_CONTAINER, Selector::Id(PROJECTS_CONTAINER_ID)),
        (PROJECTS_GRID, Selector::Id(PROJECTS_GRID_ID)),
    ];
    bindings.extend(list_bindings(&cards, PROJECTS_GRID_ID, ITEM_ID_ATTR));
    SectionPlan {
        owner: PROJECTS_OWNER,
        choreography,
        bindings,
    }
}

/// Mobile menu links drop in one after another each time the menu opens.
pub fn nav_menu(links: &[(&'static str, &'static str)]) -> SectionPlan {
    let links = list_targets(NAV_LINK_BASE, links.iter().map(|&(_, href)| ItemKey::Text(href)));
    let link_targets = ids(&links);
    let timeline = Timeline::new()
        .from_to(
            &link_targets,
            PropSet::new().opacity(0.0).y(40.0),
            PropSet::new().opacity(1.0).y(0.0),
            TweenConfig::new(0.5, Ease::PowerOut(1)).stagger(0.1).delay(0.1),
            Position::At(0.0),
        )
        .from_to(
            &[NAV_MENU_FOOTER],
            PropSet::new().opacity(0.0),
            PropSet::new().opacity(1.0),
            TweenConfig::new(0.3, Ease::PowerOut(1)),
            Position::At(0.6),
        );
    let choreography =
        Choreography::new("nav-menu").sequence(SequenceTrigger::Immediate { delay: 0.0 }, timeline);

    let mut bindings = list_bindings(&links, NAV_MENU_LINKS_ID, "href");
    bindings.push((NAV_MENU_FOOTER, Selector::Id(NAV_MENU_FOOTER_ID)));
    SectionPlan {
        owner: NAV_MENU_OWNER,
        choreography,
        bindings,
    }
}

/// Sections mounted for the lifetime of the page.
pub fn page_sections(runners: &[RunnerRow], items: &[ProjectItem]) -> Vec<SectionPlan> {
    vec![hero(), leaderboard(runners), journey(), projects(items)]
}
