use yew::prelude::*;

use crate::api_client::eai::EaiScore;

const PER_PAGE: usize = 20;
const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub scores: Vec<EaiScore>,
}

#[function_component(DataTable)]
pub fn data_table(props: &Props) -> Html {
    let page = use_state(|| 1usize);

    if props.scores.is_empty() {
        return html! {
            <div class="data-table-container">
                <h3>{"Sample Data"}</h3>
                <p>{"No data available"}</p>
            </div>
        };
    }

    let total = props.scores.len();
    let total_pages = total.div_ceil(PER_PAGE);
    let current = (*page).min(total_pages);
    let start = (current - 1) * PER_PAGE;
    let end = (start + PER_PAGE).min(total);

    let goto = {
        let page = page.clone();
        Callback::from(move |target: usize| page.set(target))
    };

    let page_button = |target: usize, label: String, disabled: bool, active: bool| {
        let goto = goto.clone();
        html! {
            <button
                class={classes!("page-btn", active.then_some("active"))}
                onclick={Callback::from(move |_| goto.emit(target))}
                {disabled}
            >
                {label}
            </button>
        }
    };

    // Window of page numbers centered on the current page.
    let mut first_visible = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let last_visible = (first_visible + MAX_VISIBLE_PAGES - 1).min(total_pages);
    if last_visible - first_visible + 1 < MAX_VISIBLE_PAGES {
        first_visible = last_visible.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    }

    html! {
        <div class="data-table-container">
            <div class="table-header">
                <h3>{"Sample Data"}</h3>
                <span class="table-info">
                    { format!("Showing {}-{} of {} records", start + 1, end, total) }
                </span>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"#"}</th>
                        <th>{"Date"}</th>
                        <th>{"Region"}</th>
                        <th>{"Station"}</th>
                        <th>{"Type"}</th>
                        <th>{"Layer"}</th>
                        <th>{"EAI"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.scores[start..end].iter().enumerate().map(|(offset, score)| {
                        let eai = score
                            .eai
                            .map(|v| format!("{v:.1}"))
                            .unwrap_or_else(|| "N/A".to_string());
                        html! {
                            <tr key={score.id.clone()}>
                                <td class="row-number">{start + offset + 1}</td>
                                <td>{score.date.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                                <td>{score.region.clone().unwrap_or_default()}</td>
                                <td>{score.station.clone().unwrap_or_default()}</td>
                                <td>{score.sample_type.clone().unwrap_or_default()}</td>
                                <td>{score.water_layer.clone().unwrap_or_else(|| "-".to_string())}</td>
                                <td class="eai-cell">{eai}</td>
                                <td>
                                    <span class={classes!("status-badge", score.status.as_str())}>
                                        {&score.status_label.vi}
                                    </span>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>

            { if total_pages > 1 {
                html! {
                    <div class="pagination">
                        { page_button(1, "First".to_string(), current == 1, false) }
                        { page_button(current.saturating_sub(1).max(1), "Prev".to_string(), current == 1, false) }
                        { for (first_visible..=last_visible).map(|p| {
                            page_button(p, p.to_string(), false, p == current)
                        })}
                        { page_button((current + 1).min(total_pages), "Next".to_string(), current == total_pages, false) }
                        { page_button(total_pages, "Last".to_string(), current == total_pages, false) }
                        <span class="page-info">{ format!("Page {} of {}", current, total_pages) }</span>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
