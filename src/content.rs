use temcy_core::content::{GalleryItem, GridShape, ProjectItem, RunnerRow};

pub const RUNNERS: [RunnerRow; 5] = [
    RunnerRow {
        id: "01",
        name: "KIKO_RUNS",
        distance_km: 64.2,
        elevation_m: 1200,
    },
    RunnerRow {
        id: "02",
        name: "TEMBALANG_GHOST",
        distance_km: 48.5,
        elevation_m: 850,
    },
    RunnerRow {
        id: "03",
        name: "GORPCORE_DAVE",
        distance_km: 12.0,
        elevation_m: 150,
    },
    RunnerRow {
        id: "04",
        name: "SEMARANG_SPEED",
        distance_km: 8.5,
        elevation_m: 60,
    },
    RunnerRow {
        id: "05",
        name: "NIGHT_OWL",
        distance_km: 102.0,
        elevation_m: 2400,
    },
];

pub const PHOTOS: [GalleryItem; 5] = [
    GalleryItem {
        id: 1,
        image: "/journey/fun-run-vol-1/527460513_17857591587472115_2053450966423476603_n.jpg",
        category: "FUN RUN VOL#1",
        shape: GridShape::new(1, 1),
    },
    GalleryItem {
        id: 2,
        image: "/journey/fun-run-vol-1/527608154_17857591605472115_2949294161144664778_n.jpg",
        category: "FUN RUN VOL#1",
        shape: GridShape::new(1, 2),
    },
    GalleryItem {
        id: 3,
        image: "/journey/fun-run-vol-1/528677293_17857591548472115_1355250004120705630_n.jpg",
        category: "FUN RUN VOL#1",
        shape: GridShape::new(1, 1),
    },
    GalleryItem {
        id: 4,
        image: "/journey/night-run-vol-1/501386218_17882532123298796_5377195314550435114_n.jpg",
        category: "NIGHT RUN VOL#1",
        shape: GridShape::new(1, 2),
    },
    GalleryItem {
        id: 5,
        image: "/journey/night-run-vol-1/502086494_17882532495298796_2671934384226422863_n.jpg",
        category: "NIGHT RUN VOL#1",
        shape: GridShape::new(1, 1),
    },
];

pub const PROJECTS: [ProjectItem; 5] = [
    ProjectItem {
        id: 1,
        title: "PRE ORDER JERSEY TEMCY RUN V1",
        description: "Limited Edition Release. Get yours now.",
        stat: "PRE-ORDER",
        image: Some("/merch/jersey1.png"),
        href: Some("#merch"),
        shape: GridShape::new(8, 2),
    },
    ProjectItem {
        id: 2,
        title: "HIGHLAND TRAIL RUN",
        description: "Afternoon Elevation Run.",
        stat: "SEASON_1",
        image: Some("/projects/highland-trail.jpg"),
        href: None,
        shape: GridShape::new(4, 1),
    },
    ProjectItem {
        id: 3,
        title: "FIVE MILE RUN By FKM UNDIP",
        description: "Sunday Fun Run Event. 5 Mile Diponegoro University Route.",
        stat: "ONGOING",
        image: Some("/projects/5k-event-by-fkm.jpg"),
        href: None,
        shape: GridShape::new(4, 1),
    },
    ProjectItem {
        id: 4,
        title: "COMMUNITY WORKSHOP",
        description: "Gear Talk & Running Science.",
        stat: "ARCHIVED",
        image: Some("/projects/workshop-session.jpg"),
        href: None,
        shape: GridShape::new(4, 1),
    },
    ProjectItem {
        id: 5,
        title: "SPECIAL EVENT: TEMBALANG LOOP",
        description: "Open for all communities.",
        stat: "FINISHED",
        image: Some("/projects/special-event.jpg"),
        href: None,
        shape: GridShape::new(12, 1),
    },
];
