use crate::core::filter::type_options;
use crate::core::locale::Labels;
use crate::core::markup::{Element, Markup};
use crate::domain::model::{FilterState, Transfer};
use crate::domain::ports::SelectOption;
use crate::utils::date::format_transfer_date;

/// Element ids of the page anchors.
pub const TEAM_FILTER_ID: &str = "team-filter";
pub const TYPE_FILTER_ID: &str = "transfer-type";
pub const CONTAINER_ID: &str = "transfers-container";

fn detail_item(label: &str, value: impl Into<String>) -> Element {
    Element::new("div")
        .class("detail-item")
        .child(Element::new("span").class("detail-label").text(label))
        .child(Element::new("span").class("detail-value").text(value))
}

/// Card for a single transfer.
pub fn create_transfer_markup(transfer: &Transfer, labels: &Labels) -> Markup {
    // anything that is not an arrival is styled as a departure
    let (entry_class, type_class) = if transfer.kind.is_arrival() {
        ("transfer-entry transfer-in", "transfer-type in")
    } else {
        ("transfer-entry transfer-out", "transfer-type out")
    };

    Element::new("article")
        .class(entry_class)
        .child(
            Element::new("div")
                .class("transfer-header")
                .child(
                    Element::new("h3")
                        .class("player-name")
                        .text(transfer.player_name.as_str()),
                )
                .child(
                    Element::new("span")
                        .class(type_class)
                        .text(labels.direction(transfer.kind)),
                ),
        )
        .child(
            Element::new("div")
                .class("transfer-details")
                .child(detail_item(&labels.from, transfer.from_team.as_str()))
                .child(detail_item(&labels.to, transfer.to_team.as_str()))
                .child(detail_item(
                    &labels.date,
                    format_transfer_date(&transfer.transfer_date),
                ))
                .child(detail_item(&labels.fee, transfer.fee.as_str())),
        )
        .child(
            Element::new("div")
                .class("transfer-summary")
                .text(transfer.summary.as_str()),
        )
        .child(
            Element::new("div").class("transfer-source").child(
                Element::new("a")
                    .attr("href", transfer.source_url.as_str())
                    .attr("target", "_blank")
                    .attr("rel", "noopener")
                    .class("source-link")
                    .text(format!("{} {}", labels.source, transfer.source_name)),
            ),
        )
        .into()
}

pub fn no_results(labels: &Labels) -> Markup {
    Element::new("div")
        .class("no-results")
        .text(labels.no_results.as_str())
        .into()
}

pub fn error_message(labels: &Labels) -> Markup {
    Element::new("div")
        .class("error")
        .text(labels.load_error.as_str())
        .into()
}

/// Container content for an already filtered list.
pub fn render_transfers(filtered: &[&Transfer], labels: &Labels) -> Markup {
    if filtered.is_empty() {
        return no_results(labels);
    }

    Markup::Fragment(
        filtered
            .iter()
            .map(|transfer| create_transfer_markup(transfer, labels))
            .collect(),
    )
}

fn select(id: &'static str, options: Vec<SelectOption>, selected: Option<&str>) -> Element {
    Element::new("select")
        .attr("id", id)
        .children(options.into_iter().map(|option| {
            let mut element = Element::new("option").attr("value", option.value.as_str());
            if selected == Some(option.value.as_str()) {
                element = element.attr("selected", "selected");
            }
            element.text(option.label)
        }))
}

/// Full static page: both selectors with the current selection plus the
/// container holding `content`.
pub fn page_document(
    labels: &Labels,
    team_options: &[SelectOption],
    filters: &FilterState,
    content: Markup,
) -> Markup {
    let mut teams = vec![SelectOption::new("", labels.all_teams.clone())];
    teams.extend(
        team_options
            .iter()
            .filter(|option| !option.value.trim().is_empty())
            .cloned(),
    );

    let html = Element::new("html")
        .attr("lang", "pl")
        .child(
            Element::new("head")
                .child(Element::new("meta").attr("charset", "utf-8"))
                .child(
                    Element::new("meta")
                        .attr("name", "viewport")
                        .attr("content", "width=device-width, initial-scale=1"),
                )
                .child(Element::new("title").text(labels.page_title.as_str()))
                .child(
                    Element::new("link")
                        .attr("rel", "stylesheet")
                        .attr("href", "styles.css"),
                ),
        )
        .child(
            Element::new("body")
                .child(Element::new("h1").text(labels.page_title.as_str()))
                .child(
                    Element::new("div")
                        .class("filters")
                        .child(select(
                            TEAM_FILTER_ID,
                            teams,
                            Some(filters.team.as_deref().unwrap_or("")),
                        ))
                        .child(select(
                            TYPE_FILTER_ID,
                            type_options(labels),
                            Some(filters.kind.map_or("", |kind| kind.as_str())),
                        )),
                )
                .child(
                    Element::new("main")
                        .attr("id", CONTAINER_ID)
                        .class("transfers-container")
                        .child(content),
                ),
        );

    Markup::Fragment(vec![Markup::Raw("<!DOCTYPE html>".to_string()), html.into()])
}
