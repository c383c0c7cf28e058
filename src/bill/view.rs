//! Markup for the bills page, the receipt modal and the new bill page.

use maud::{Markup, PreEscaped, html};

use crate::{
    bill::{
        DisplayBill,
        container::{EventBindings, MODAL_CONTAINER_ID},
    },
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_amount, modal_styles,
    },
    navigation::VerticalLayout,
};

/// What the bills page shows: the user's bills, or why they could not be
/// fetched.
pub enum BillsContent<'a> {
    Data {
        bills: &'a [DisplayBill],
        bindings: &'a EventBindings,
    },
    Error(&'a str),
}

const EYE_ICON: &str = r#"<svg aria-hidden="true" class="w-5 h-5" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/><circle cx="12" cy="12" r="3"/></svg>"#;

/// The expense categories an employee can file a bill under.
const BILL_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// Render the bills page.
pub fn bills_view(content: &BillsContent, layout: VerticalLayout) -> Markup {
    let page = match content {
        BillsContent::Data { bills, bindings } => bills_table_view(bills, bindings),
        BillsContent::Error(message) => error_message_view(message),
    };

    base(
        "Mes notes de frais",
        &[modal_styles()],
        &layout.into_html(&page),
    )
}

fn bills_table_view(bills: &[DisplayBill], bindings: &EventBindings) -> Markup {
    let icon_eye = &bindings.icon_eye;
    let new_bill = &bindings.new_bill;

    let table_row = |bill: &DisplayBill| {
        let receipt_values = match &bill.file_url {
            Some(url) => serde_json::json!({ "url": url }).to_string(),
            None => "{}".to_owned(),
        };

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE) { (bill.bill_type) }
                td class=(TABLE_CELL_STYLE) { (bill.name) }
                td class=(TABLE_CELL_STYLE) { (bill.date) }
                td class={ (TABLE_CELL_STYLE) " text-right tabular-nums" } { (format_amount(bill.amount)) }
                td class=(TABLE_CELL_STYLE) { (bill.status) }
                td class=(TABLE_CELL_STYLE)
                {
                    button
                        type="button"
                        title="Voir le justificatif"
                        data-testid=(icon_eye.test_id)
                        data-bill-url=[bill.file_url.as_deref()]
                        hx-get=(icon_eye.endpoint)
                        hx-vals=(receipt_values)
                        hx-target=[icon_eye.target]
                        hx-swap="innerHTML"
                        class="text-blue-600 hover:text-blue-500 dark:text-blue-500"
                    {
                        (PreEscaped(EYE_ICON))
                    }
                }
            }
        )
    };

    html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end gap-4"
                {
                    h1 class="text-xl font-bold" { "Mes notes de frais" }

                    button
                        type="button"
                        data-testid=(new_bill.test_id)
                        hx-get=(new_bill.endpoint)
                        hx-target=[new_bill.target]
                        hx-sync="this:replace"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Nouvelle note de frais"
                    }
                }

                div class="dark:bg-gray-800 overflow-x-auto"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Nom" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Montant" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Statut" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody data-testid="tbody"
                        {
                            @for bill in bills {
                                (table_row(bill))
                            }

                            @if bills.is_empty() {
                                tr
                                {
                                    td
                                        colspan="6"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "Aucune note de frais pour le moment."
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div id=(MODAL_CONTAINER_ID) {}
        }
    )
}

fn error_message_view(message: &str) -> Markup {
    html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            div
                data-testid="error-message"
                class="mx-auto max-w-screen-sm text-center"
            {
                h1
                    class="mb-4 text-4xl tracking-tight font-extrabold
                        text-blue-600 dark:text-blue-500"
                {
                    "Erreur"
                }

                p class="mb-4 text-xl text-gray-900 dark:text-white" { (message) }
            }
        }
    )
}

/// Render the modal showing the receipt at `file_url`.
///
/// A missing or unusable URL shows a notice instead of the image.
pub fn receipt_modal(file_url: Option<&str>) -> Markup {
    let receipt_url = file_url.map(str::trim).filter(|url| is_displayable_url(url));

    html!(
        div
            id="modaleFile"
            data-testid="modal"
            class="modal fixed inset-0 z-50 flex items-center justify-center bg-black/50"
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-title"
        {
            div class="w-full max-w-3xl rounded-lg bg-white shadow dark:bg-gray-800"
            {
                div class="flex items-center justify-between border-b p-4 dark:border-gray-700"
                {
                    h5 id="modal-title" class="text-lg font-semibold text-gray-900 dark:text-white"
                    {
                        "Justificatif"
                    }

                    button
                        type="button"
                        aria-label="Fermer"
                        onclick="this.closest('.modal').remove()"
                        class="text-gray-500 hover:text-gray-900 dark:hover:text-white"
                    {
                        "×"
                    }
                }

                div class="modal-body flex justify-center p-4"
                {
                    @if let Some(url) = receipt_url {
                        img class="max-w-full" src=(url) alt="Bill";
                    } @else {
                        p class="text-gray-500 dark:text-gray-400"
                        {
                            "Aucun justificatif pour cette note de frais."
                        }
                    }
                }
            }
        }
    )
}

fn is_displayable_url(url: &str) -> bool {
    url.starts_with("https://")
        || url.starts_with("http://")
        || (url.starts_with('/') && !url.starts_with("//"))
}

/// Render the page with the form for a new bill.
pub fn new_bill_view(layout: VerticalLayout) -> Markup {
    let form = html!(
        form data-testid="form-new-bill" class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="expense-type" class=(FORM_LABEL_STYLE) { "Type de dépense" }
                select id="expense-type" name="type" required class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for bill_type in BILL_TYPES {
                        option { (bill_type) }
                    }
                }
            }

            div
            {
                label for="expense-name" class=(FORM_LABEL_STYLE) { "Nom de la dépense" }
                input id="expense-name" type="text" name="name" placeholder="Vol Paris Londres"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="datepicker" class=(FORM_LABEL_STYLE) { "Date" }
                input id="datepicker" type="date" name="date" required class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Montant TTC" }
                input id="amount" type="number" name="amount" placeholder="348" required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="flex gap-4"
            {
                div class="flex-1"
                {
                    label for="vat" class=(FORM_LABEL_STYLE) { "TVA" }
                    input id="vat" type="number" name="vat" placeholder="70"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div class="flex-1"
                {
                    label for="pct" class=(FORM_LABEL_STYLE) { "%" }
                    input id="pct" type="number" name="pct" placeholder="20"
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="commentary" class=(FORM_LABEL_STYLE) { "Commentaire" }
                textarea id="commentary" name="commentary" rows="3" class=(FORM_TEXT_INPUT_STYLE) {}
            }

            div
            {
                label for="file" class=(FORM_LABEL_STYLE) { "Justificatif" }
                input id="file" type="file" name="file" required class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class={ "w-full " (BUTTON_PRIMARY_STYLE) } { "Envoyer" }
        }
    );

    let content = html!(
        main class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold my-6" { "Envoyer une note de frais" }
            (form)
        }
    );

    base("Nouvelle note de frais", &[], &layout.into_html(&content))
}



#[cfg(test)]
mod new_bill_view_tests {
    use scraper::{Html, Selector};

    use crate::{
        bill::view::new_bill_view, endpoints, navigation::VerticalLayout, session::Session,
        test_utils::assert_valid_html,
    };

    #[test]
    fn renders_form_and_highlights_mail_icon() {
        let layout = VerticalLayout::new(endpoints::NEW_BILL_VIEW, &Session::employee("a@a"));

        let html = Html::parse_document(&new_bill_view(layout).into_string());

        assert_valid_html(&html);
        assert!(
            html.select(&Selector::parse("[data-testid=form-new-bill]").unwrap())
                .next()
                .is_some(),
            "new bill form missing"
        );
        let icon = html
            .select(&Selector::parse("[data-testid=icon-mail]").unwrap())
            .next()
            .expect("No mail icon found");
        assert!(icon.value().classes().any(|class| class == "active-icon"));
    }
}
