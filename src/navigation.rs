//! This file defines the vertical navigation layout shown on the left of every page.

use maud::{Markup, PreEscaped, html};

use crate::{endpoints, session::Session};

/// An icon link in the vertical layout.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct IconLink {
    url: &'static str,
    title: &'static str,
    test_id: &'static str,
    icon: &'static str,
    is_current: bool,
}

impl IconLink {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "active-icon flex items-center justify-center w-12 h-12 rounded-lg \
            text-white bg-blue-700 dark:bg-blue-600"
        } else {
            "flex items-center justify-center w-12 h-12 rounded-lg opacity-60 \
            text-gray-900 hover:bg-gray-100 hover:opacity-100 dark:text-white \
            dark:hover:bg-gray-700"
        };

        html!(
            a
                href=(self.url)
                title=(self.title)
                data-testid=(self.test_id)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (PreEscaped(self.icon))
            }
        )
    }
}

const WINDOW_ICON: &str = r#"<svg aria-hidden="true" class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="3" y="4" width="18" height="16" rx="2"/><path d="M3 9h18"/></svg>"#;

const MAIL_ICON: &str = r#"<svg aria-hidden="true" class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="3" y="5" width="18" height="14" rx="2"/><path d="m3 7 9 6 9-6"/></svg>"#;

pub struct VerticalLayout {
    links: Vec<IconLink>,
}

impl VerticalLayout {
    /// Get the vertical layout for the user in `session`.
    ///
    /// Employees get links to their bills and to the new bill form. If a link
    /// matches `active_endpoint`, then that link will be marked as active and
    /// displayed differently in the HTML. Other users get no links.
    pub fn new(active_endpoint: &str, session: &Session) -> Self {
        if !session.is_employee() {
            return VerticalLayout { links: vec![] };
        }

        let links = vec![
            IconLink {
                url: endpoints::BILLS_VIEW,
                title: "Mes notes de frais",
                test_id: "icon-window",
                icon: WINDOW_ICON,
                is_current: active_endpoint == endpoints::BILLS_VIEW,
            },
            IconLink {
                url: endpoints::NEW_BILL_VIEW,
                title: "Nouvelle note de frais",
                test_id: "icon-mail",
                icon: MAIL_ICON,
                is_current: active_endpoint == endpoints::NEW_BILL_VIEW,
            },
        ];

        VerticalLayout { links }
    }

    /// Render the layout with `content` next to it.
    pub fn into_html(self, content: &Markup) -> Markup {
        html!(
            div class="flex min-h-screen"
            {
                nav
                    class="flex flex-col items-center gap-6 w-20 py-6 bg-white
                        border-r border-gray-200 dark:bg-gray-800 dark:border-gray-700"
                    data-testid="layout-vertical"
                {
                    span class="text-lg font-bold text-gray-900 dark:text-white" { "Billed" }

                    @for link in self.links {
                        (link.into_html())
                    }
                }

                div class="flex-1" { (content) }
            }
        )
    }
}
