//! Static menu topology
//!
//! All menus live in one arena built at startup. Submenu entries refer to
//! their children by [`MenuId`]. [`MenuTreeBuilder::build`] refuses cycles,
//! dangling references and malformed widgets, so navigation never has to
//! check for them.

use crate::entry::EntryAction;
use crate::error::CmsError;
use crate::menu::{Menu, MenuId};
use crate::widget::{Transform, Widget};
use std::collections::BTreeSet;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct MenuTree {
    menus: Vec<Menu>,
    root: MenuId,
}

impl MenuTree {
    pub fn builder() -> MenuTreeBuilder {
        MenuTreeBuilder::default()
    }

    pub fn root(&self) -> MenuId {
        self.root
    }

    pub fn get(&self, id: MenuId) -> Option<&Menu> {
        self.menus.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Find a menu by title
    pub fn find(&self, title: &str) -> Option<MenuId> {
        self.menus
            .iter()
            .position(|menu| menu.title == title)
            .map(MenuId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MenuId, &Menu)> {
        self.menus.iter().enumerate().map(|(i, menu)| (MenuId(i), menu))
    }
}

#[derive(Debug, Default)]
pub struct MenuTreeBuilder {
    slots: Vec<Option<Menu>>,
}

impl MenuTreeBuilder {
    /// Add a fully defined menu
    pub fn add(&mut self, menu: Menu) -> MenuId {
        self.slots.push(Some(menu));
        MenuId(self.slots.len() - 1)
    }

    /// Reserve an id for a menu defined later, so parents can reference it first
    pub fn reserve(&mut self) -> MenuId {
        self.slots.push(None);
        MenuId(self.slots.len() - 1)
    }

    pub fn define(&mut self, id: MenuId, menu: Menu) -> Result<(), CmsError> {
        match self.slots.get_mut(id.0) {
            Some(slot) => {
                *slot = Some(menu);
                Ok(())
            }
            None => Err(CmsError::UnknownMenu { id: id.0 }),
        }
    }

    pub fn build(self, root: MenuId) -> Result<MenuTree, CmsError> {
        let menus = self
            .slots
            .into_iter()
            .enumerate()
            .map(|(id, slot)| slot.ok_or(CmsError::UndefinedMenu { id }))
            .collect::<Result<Vec<_>, _>>()?;

        if root.0 >= menus.len() {
            return Err(CmsError::UnknownMenu { id: root.0 });
        }

        for menu in &menus {
            validate_menu(menu, menus.len())?;
        }
        check_acyclic(&menus)?;

        debug!(menus = menus.len(), root = %root, "Built menu tree");
        Ok(MenuTree { menus, root })
    }
}

fn validate_menu(menu: &Menu, menu_count: usize) -> Result<(), CmsError> {
    // A visit stages one scalar per field, so each field has a single owner entry.
    let mut bound = BTreeSet::new();
    for entry in &menu.entries {
        let at = || (menu.title.clone(), entry.label.clone());

        if let Some(EntryAction::Submenu(child)) = entry.action {
            if child.0 >= menu_count {
                let (menu, entry) = at();
                return Err(CmsError::DanglingSubmenu { menu, entry });
            }
        }

        if let Widget::EnumTable(table) = &entry.widget {
            if !table.is_valid() {
                let (menu, entry) = at();
                return Err(CmsError::EnumTableTooShort {
                    menu,
                    entry,
                    max_index: table.max_index,
                    names: table.names.len(),
                });
            }
        }

        if !entry.widget.is_well_formed() {
            let (menu, entry) = at();
            return Err(CmsError::InvalidBounds { menu, entry });
        }

        if let Some(field_ref) = entry.widget.field() {
            if field_ref.transform == Transform::Scale(0) {
                let (menu, entry) = at();
                return Err(CmsError::InvalidTransform { menu, entry });
            }
            if !bound.insert(field_ref.field) {
                let (menu, entry) = at();
                return Err(CmsError::DuplicateField {
                    menu,
                    entry,
                    field: field_ref.field.to_string(),
                });
            }
        }
    }

    let backs = menu
        .entries
        .iter()
        .filter(|e| matches!(e.widget, Widget::Back))
        .count();
    if backs != 1 {
        warn!(menu = %menu.title, backs, "Menu should have exactly one BACK entry");
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

fn check_acyclic(menus: &[Menu]) -> Result<(), CmsError> {
    let mut marks = vec![Mark::Unvisited; menus.len()];
    for start in 0..menus.len() {
        visit(menus, start, &mut marks)?;
    }
    Ok(())
}

fn visit(menus: &[Menu], id: usize, marks: &mut [Mark]) -> Result<(), CmsError> {
    match marks[id] {
        Mark::Done => return Ok(()),
        Mark::InProgress => {
            return Err(CmsError::CyclicMenu {
                menu: menus[id].title.clone(),
            });
        }
        Mark::Unvisited => {}
    }

    marks[id] = Mark::InProgress;
    for entry in &menus[id].entries {
        if let Some(EntryAction::Submenu(child)) = entry.action {
            visit(menus, child.0, marks)?;
        }
    }
    marks[id] = Mark::Done;
    Ok(())
}
