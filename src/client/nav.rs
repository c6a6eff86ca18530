//! Declarative navigation tree and per-surface menu state.
//!
//! Each section owns a set of path prefixes. The active section is derived from the current
//! location, and an active section is always expanded regardless of its manual toggle.

use std::collections::BTreeSet;

use crate::client::session::Role;

const ALL_ROLES: &[Role] = &[Role::Administrator, Role::Operator];
const ADMIN_ONLY: &[Role] = &[Role::Administrator];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
    /// Location prefixes owned by this section.
    pub prefixes: &'static [&'static str],
    pub items: &'static [NavItem],
    /// Roles that see this section.
    pub roles: &'static [Role],
}

impl NavSection {
    /// Whether `path` starts with any of the section's prefixes.
    pub fn owns(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
    }

    pub fn visible_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

const CONSOLE_SECTIONS: &[NavSection] = &[
    NavSection {
        id: "inventario",
        label: "Inventario",
        prefixes: &["/freezers", "/maintenance"],
        items: &[
            NavItem {
                label: "Freezers",
                path: "/freezers",
            },
            NavItem {
                label: "Mantenimientos",
                path: "/maintenance",
            },
        ],
        roles: ALL_ROLES,
    },
    NavSection {
        id: "clientes",
        label: "Clientes",
        prefixes: &["/clients", "/zones"],
        items: &[
            NavItem {
                label: "Clientes",
                path: "/clients",
            },
            NavItem {
                label: "Zonas",
                path: "/zones",
            },
        ],
        roles: ALL_ROLES,
    },
    NavSection {
        id: "operaciones",
        label: "Operaciones",
        prefixes: &["/events", "/notifications"],
        items: &[
            NavItem {
                label: "Eventos",
                path: "/events",
            },
            NavItem {
                label: "Notificaciones",
                path: "/notifications",
            },
        ],
        roles: ALL_ROLES,
    },
    NavSection {
        id: "usuarios",
        label: "Usuarios",
        prefixes: &["/users"],
        items: &[
            NavItem {
                label: "Administradores",
                path: "/users/administrators",
            },
            NavItem {
                label: "Operadores",
                path: "/users/operators",
            },
        ],
        roles: ADMIN_ONLY,
    },
    NavSection {
        id: "auditoria",
        label: "Auditoría",
        prefixes: &["/audit"],
        items: &[NavItem {
            label: "Registro de auditoría",
            path: "/audit",
        }],
        roles: ADMIN_ONLY,
    },
];

/// The console's navigation tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavTree {
    sections: &'static [NavSection],
}

impl NavTree {
    pub const fn new(sections: &'static [NavSection]) -> Self {
        Self { sections }
    }

    pub const fn console() -> Self {
        Self::new(CONSOLE_SECTIONS)
    }

    pub fn sections(&self) -> &'static [NavSection] {
        self.sections
    }

    /// Sections rendered for `role`, in declared order.
    pub fn for_role(&self, role: Role) -> impl Iterator<Item = &'static NavSection> {
        self.sections
            .iter()
            .filter(move |section| section.visible_to(role))
    }

    /// First section in declared order owning `path`.
    pub fn active_section(&self, path: &str) -> Option<&'static NavSection> {
        self.sections.iter().find(|section| section.owns(path))
    }
}

/// Rendering surface owning its own menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    /// Persistent side navigation.
    Desktop,
    /// Overlay drawer closed after every navigation.
    Mobile,
}

/// Where a leaf click leads and whether the overlay closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSelection {
    pub path: &'static str,
    pub close_overlay: bool,
}

/// Expand/collapse state of one surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavMenuState {
    tree: NavTree,
    surface: Surface,
    manual_open: BTreeSet<&'static str>,
    overlay_open: bool,
}

impl NavMenuState {
    pub fn new(tree: NavTree, surface: Surface) -> Self {
        Self {
            tree,
            surface,
            manual_open: BTreeSet::new(),
            overlay_open: false,
        }
    }

    pub fn tree(&self) -> NavTree {
        self.tree
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn toggle(&mut self, section_id: &'static str) {
        if !self.manual_open.remove(section_id) {
            self.manual_open.insert(section_id);
        }
    }

    pub fn is_manually_open(&self, section_id: &str) -> bool {
        self.manual_open.contains(section_id)
    }

    pub fn is_active(&self, section: &NavSection, path: &str) -> bool {
        self.tree
            .active_section(path)
            .is_some_and(|active| active.id == section.id)
    }

    /// Manual toggle OR-ed with the active-location rule.
    pub fn is_expanded(&self, section: &NavSection, path: &str) -> bool {
        self.is_manually_open(section.id) || self.is_active(section, path)
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }

    /// Records a leaf click; on the mobile surface the overlay closes.
    pub fn select(&mut self, item: &NavItem) -> NavSelection {
        let close_overlay = self.surface == Surface::Mobile;
        if close_overlay {
            self.overlay_open = false;
        }

        NavSelection {
            path: item.path,
            close_overlay,
        }
    }
}
