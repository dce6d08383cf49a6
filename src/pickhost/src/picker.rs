// pickhost/src/picker.rs

//! Selection menu and the interactive picker that chooses from it.

use crate::cache::CachedEntry;
use anyhow::{Context, Result};
use hostsfile::{HostCatalog, HostEntry};
use std::io::{BufRead, Write};

const NAME_WIDTH: usize = 20;
const USER_WIDTH: usize = 12;
const HOST_WIDTH: usize = 20;

/// What a selection resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub user: String,
    pub host: String,
}

impl From<&HostEntry> for Target {
    fn from(entry: &HostEntry) -> Self {
        Self {
            name: entry.name.clone(),
            user: entry.first_user().to_string(),
            host: entry.host.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub critical: bool,
    pub target: Target,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuGroup {
    /// Empty for the last-selection group
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// Everything offered to the user, in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Menu {
    groups: Vec<MenuGroup>,
}

impl Menu {
    /// The cached selection (if any) first, then every catalog group.
    pub fn new(cached: Option<&CachedEntry>, catalog: &HostCatalog) -> Self {
        let mut groups = Vec::with_capacity(catalog.len() + 1);

        if let Some(cached) = cached {
            groups.push(MenuGroup {
                title: String::new(),
                items: vec![MenuItem {
                    label: cached.label(),
                    critical: true,
                    target: cached.target(),
                }],
            });
        }

        for (name, entries) in catalog.groups() {
            groups.push(MenuGroup {
                title: name.to_string(),
                items: entries
                    .iter()
                    .map(|entry| MenuItem {
                        label: entry_label(entry),
                        critical: entry.critical,
                        target: Target::from(entry),
                    })
                    .collect(),
            });
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    /// All items across groups, numbered from zero in display order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.groups.iter().flat_map(|group| group.items.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Columns: name (indented by depth), users, host, comment.
fn entry_label(entry: &HostEntry) -> String {
    let name = format!("{}{}", "  ".repeat(entry.depth), entry.name);
    let label = format!(
        "{:<NAME_WIDTH$} {:<USER_WIDTH$} {:<HOST_WIDTH$} {}",
        name,
        entry.users.join(","),
        entry.host,
        entry.comment
    );
    label.trim_end().to_string()
}

/// Chooses one item of a menu, or nothing when the user cancels.
pub trait Picker {
    fn pick<'m>(&mut self, menu: &'m Menu) -> Result<Option<&'m MenuItem>>;
}

/// Numbered-list picker over any reader and writer.
pub struct PromptPicker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn render(&mut self, menu: &Menu) -> Result<()> {
        let mut number = 1;
        for group in menu.groups() {
            if !group.title.is_empty() {
                writeln!(self.output, "[{}]", group.title)?;
            }
            for item in &group.items {
                let marker = if item.critical { '!' } else { ' ' };
                writeln!(self.output, "{:>3}) {}{}", number, marker, item.label)?;
                number += 1;
            }
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Picker for PromptPicker<R, W> {
    fn pick<'m>(&mut self, menu: &'m Menu) -> Result<Option<&'m MenuItem>> {
        if menu.is_empty() {
            return Ok(None);
        }
        self.render(menu)?;

        let count = menu.len();
        loop {
            write!(self.output, "Select a host [1-{}], empty to cancel: ", count)?;
            self.output.flush()?;

            let mut answer = String::new();
            let read = self
                .input
                .read_line(&mut answer)
                .context("Failed to read selection")?;
            let answer = answer.trim();
            if read == 0 || answer.is_empty() || answer.eq_ignore_ascii_case("q") {
                return Ok(None);
            }

            match answer.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(menu.items().nth(n - 1)),
                _ => writeln!(self.output, "Invalid choice: {}", answer)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn catalog() -> HostCatalog {
        hostsfile::reads(
            "[work]\nweb! = deploy,www@10.0.0.1 # front\ndb = root@10.0.0.2\ndb->replica = root@10.0.0.3\n[lab]\npi = pi@10.9.0.2\n",
        )
        .unwrap()
    }

    fn cached() -> CachedEntry {
        CachedEntry {
            name: "pi".to_string(),
            user: "pi".to_string(),
            host: "10.9.0.2".to_string(),
            description: "Last Accessed".to_string(),
        }
    }

    fn pick(menu: &Menu, input: &str) -> (Option<Target>, String) {
        let mut output = Vec::new();
        let choice = {
            let mut picker = PromptPicker::new(Cursor::new(input.as_bytes()), &mut output);
            picker.pick(menu).unwrap().map(|item| item.target.clone())
        };
        (choice, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_menu_order_puts_cache_first() {
        let menu = Menu::new(Some(&cached()), &catalog());
        let titles: Vec<_> = menu.groups().iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["", "work", "lab"]);
        assert_eq!(menu.len(), 5);
        assert_eq!(menu.groups()[0].items[0].label, "Last Accessed: pi");
        assert!(menu.groups()[0].items[0].critical);
    }

    #[test]
    fn test_target_uses_first_user() {
        let menu = Menu::new(None, &catalog());
        let web = &menu.groups()[0].items[0];
        assert_eq!(web.target.user, "deploy");
        assert!(web.critical);
        assert!(web.label.starts_with("web "));
        assert!(web.label.contains("deploy,www"));
        assert!(web.label.ends_with("front"));
    }

    #[test]
    fn test_children_are_indented() {
        let menu = Menu::new(None, &catalog());
        let replica = &menu.groups()[0].items[2];
        assert!(replica.label.starts_with("  replica"));
    }

    #[test]
    fn test_pick_by_number() {
        let menu = Menu::new(Some(&cached()), &catalog());
        let (choice, output) = pick(&menu, "3\n");
        assert_eq!(choice.unwrap().name, "db");
        assert!(output.contains("[work]"));
        assert!(output.contains("  1) !Last Accessed: pi"));
    }

    #[test]
    fn test_invalid_answer_prompts_again() {
        let menu = Menu::new(None, &catalog());
        let (choice, output) = pick(&menu, "zero\n9\n4\n");
        assert_eq!(choice.unwrap().name, "pi");
        assert!(output.contains("Invalid choice: zero"));
        assert!(output.contains("Invalid choice: 9"));
    }

    #[test]
    fn test_cancel() {
        let menu = Menu::new(None, &catalog());
        assert_eq!(pick(&menu, "\n").0, None);
        assert_eq!(pick(&menu, "q\n").0, None);
        assert_eq!(pick(&menu, "").0, None);
    }

    #[test]
    fn test_empty_menu_picks_nothing() {
        let menu = Menu::default();
        assert!(menu.is_empty());
        let (choice, output) = pick(&menu, "1\n");
        assert_eq!(choice, None);
        assert!(output.is_empty());
    }
}
