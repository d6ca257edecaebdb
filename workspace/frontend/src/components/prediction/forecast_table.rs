use explorer::ForecastPoint;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub points: Vec<ForecastPoint>,
}

#[function_component(ForecastTable)]
pub fn forecast_table(props: &Props) -> Html {
    if props.points.is_empty() {
        return html! {};
    }

    html! {
        <div class="data-table-container">
            <div class="table-header">
                <h3>{"Forecast Periods"}</h3>
                <span class="table-info">{ format!("{} periods", props.points.len()) }</span>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Period"}</th>
                        <th>{"EAI"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.points.iter().map(|point| {
                        let eai = point
                            .eai
                            .map(|v| format!("{v:.1}"))
                            .unwrap_or_else(|| "N/A".to_string());
                        html! {
                            <tr key={point.date.to_string()}>
                                <td>{ point.date.format("%b %Y").to_string() }</td>
                                <td class="eai-cell">{eai}</td>
                                <td>
                                    <span class={classes!("status-badge", point.status.as_str())}>
                                        { format!("{} ({})", point.status_label.vi, point.status_label.en) }
                                    </span>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
