//! Sidebar with the main navigation, document shortcuts, secondary links
//! and the signed-in user at the bottom.

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

pub const HOME_PATH: &str = "/protected";

#[derive(Clone, Copy, Debug, PartialEq)]
struct NavItem {
    label: &'static str,
    href: &'static str,
    icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    /// Section caption; `None` for the main navigation.
    label: Option<&'static str>,
    items: Vec<NavItem>,
}

const fn item(label: &'static str, href: &'static str, icon: &'static str) -> NavItem {
    NavItem { label, href, icon }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: None,
            items: vec![
                item("Dashboard", "/protected", "layout-dashboard"),
                item("Berita", "/protected/berita", "news"),
                item("Lifecycle", "/protected/lifecycle", "list-details"),
                item("Analytics", "/protected/analytics", "bar-chart"),
                item("Projects", "/protected/projects", "folder"),
                item("Team", "/protected/team", "users"),
            ],
        },
        MenuGroup {
            label: Some("Documents"),
            items: vec![
                item("Data Library", "/protected/datalibrary", "database"),
                item("Reports", "/protected/reports", "report"),
                item("Word Assistant", "/protected/wordassistant", "file-word"),
            ],
        },
    ]
}

fn secondary_items() -> Vec<NavItem> {
    vec![
        item("Settings", "/protected/settings", "settings"),
        item("Get Help", "/protected/help", "help"),
        item("Search", "/protected/search", "search"),
    ]
}

/// Home matches only itself; other entries also match their sub-pages.
fn is_active(pathname: &str, href: &str) -> bool {
    let pathname = pathname.trim_end_matches('/');
    if href == HOME_PATH {
        return pathname == HOME_PATH;
    }
    pathname == href
        || pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn nav_link(entry: NavItem, pathname: Memo<String>) -> impl IntoView {
    view! {
        <a
            href=entry.href
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || pathname.with(|p| is_active(p, entry.href))
        >
            <div class="app-sidebar__item-content">
                {icon(entry.icon)}
                <span>{entry.label}</span>
            </div>
        </a>
    }
}

#[component]
fn UserFooter() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let name = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    };
    let email = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .and_then(|u| u.email.clone())
                .unwrap_or_default()
        })
    };
    let initials = move || {
        auth_state.with(|s| s.user_info.as_ref().map(|u| u.initials()).unwrap_or_default())
    };
    let avatar = move || auth_state.with(|s| s.user_info.as_ref().and_then(|u| u.avatar_url.clone()));

    let on_logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    view! {
        <div class="app-sidebar__user">
            <div class="app-sidebar__avatar">
                {move || match avatar() {
                    Some(url) => view! { <img src=url alt="" /> }.into_any(),
                    None => view! { <span>{initials}</span> }.into_any(),
                }}
            </div>
            <div class="app-sidebar__user-text">
                <span class="app-sidebar__user-name">{name}</span>
                <span class="app-sidebar__user-email">{email}</span>
            </div>
            <button class="app-sidebar__logout" title="Keluar" on:click=on_logout>
                {icon("logout")}
            </button>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = Memo::new(move |_| location.pathname.get());

    view! {
        <div class="app-sidebar">
            <a class="app-sidebar__brand" href=HOME_PATH>
                {icon("book-open")}
                <span>"RTQ AL-HIKMAH"</span>
            </a>

            <nav class="app-sidebar__content">
                {get_menu_groups()
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="app-sidebar__group">
                                {group.label.map(|label| view! {
                                    <div class="app-sidebar__group-label">{label}</div>
                                })}
                                {group
                                    .items
                                    .into_iter()
                                    .map(|entry| nav_link(entry, pathname))
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>

            <nav class="app-sidebar__secondary">
                {secondary_items()
                    .into_iter()
                    .map(|entry| nav_link(entry, pathname))
                    .collect_view()}
            </nav>

            <UserFooter />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_active_only_on_itself() {
        assert!(is_active("/protected", "/protected"));
        assert!(is_active("/protected/", "/protected"));
        assert!(!is_active("/protected/berita", "/protected"));
    }

    #[test]
    fn sections_match_their_sub_pages() {
        assert!(is_active("/protected/berita", "/protected/berita"));
        assert!(is_active("/protected/berita/12", "/protected/berita"));
        assert!(!is_active("/protected/beritaku", "/protected/berita"));
    }

    #[test]
    fn main_navigation_starts_with_dashboard_and_news() {
        let groups = get_menu_groups();
        let labels: Vec<&str> = groups[0].items.iter().take(2).map(|i| i.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Berita"]);
    }
}
