use explorer::{classify, Status, GOOD_THRESHOLD, WARNING_THRESHOLD};
use yew::prelude::*;

use crate::api_client::eai::StatusDistribution;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub average_eai: Option<f64>,
    pub distribution: StatusDistribution,
    pub total: u64,
}

#[function_component(StatusCards)]
pub fn status_cards(props: &Props) -> Html {
    let status = classify(props.average_eai);
    let average = props
        .average_eai
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <>
            <div class="eai-main-card">
                <h2>{"Average Environmental Alert Index"}</h2>
                <div class={classes!("eai-score", status.as_str())}>{average}</div>
                <div class={classes!("eai-status", status.as_str())}>
                    { format!("{} ({})", status.label_vi(), status.label_en()) }
                </div>
                <div class="eai-sample-count">
                    { format!("Based on {} samples", props.distribution.total()) }
                </div>
            </div>

            <div class="stats-grid">
                <StatCard
                    title="Good Status"
                    tier={Status::Good}
                    count={props.distribution.good}
                    hint={format!("EAI ≥ {GOOD_THRESHOLD}")}
                />
                <StatCard
                    title="Warning Status"
                    tier={Status::Warning}
                    count={props.distribution.warning}
                    hint={format!("{WARNING_THRESHOLD} ≤ EAI < {GOOD_THRESHOLD}")}
                />
                <StatCard
                    title="Bad Status"
                    tier={Status::Bad}
                    count={props.distribution.bad}
                    hint={format!("EAI < {WARNING_THRESHOLD}")}
                />
                <div class="stat-card">
                    <h3>{"Total Samples"}</h3>
                    <div class="stat-value">{props.total}</div>
                    <div class="stat-label">{"In database"}</div>
                </div>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: AttrValue,
    tier: Status,
    count: u64,
    hint: String,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("stat-card", props.tier.as_str())}>
            <h3>{&props.title}</h3>
            <div class="stat-value">{props.count}</div>
            <div class="stat-label">{&props.hint}</div>
        </div>
    }
}
