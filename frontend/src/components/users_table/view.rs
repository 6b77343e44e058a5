//! View rendering for the users table component.
//!
//! One page: a title, the "Daten laden" button, a loading indicator while a
//! fetch is in flight, and a dynamic-columns table once records are
//! present. Column headers come from the first record's keys; every cell
//! value goes through the recursive tree renderer, so nested objects such
//! as `address` and `company` expand into indented blocks inside their
//! cell.

use yew::prelude::*;

use common::model::record::{column_names, Record, RecordSet};
use common::render::{display_tree, indent_px, DisplayNode};

use super::messages::Msg;
use super::state::UsersTableComponent;

pub fn view(component: &UsersTableComponent, ctx: &Context<UsersTableComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="page">
            <h1 class="page-title">{"Debug Data mit DevTools"}</h1>
            <button class="load-btn" onclick={link.callback(|_: MouseEvent| Msg::LoadRequested)}>
                {"Daten laden"}
            </button>

            {
                if component.show_loading() {
                    html! { <p class="loading-hint">{"⏳ Lade Daten..."}</p> }
                } else {
                    html! {}
                }
            }

            {
                if component.show_table() {
                    build_table(&component.records)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Builds the table: headers from the first record, one row per record.
fn build_table(records: &RecordSet) -> Html {
    let headers = column_names(records);

    html! {
        <div class="table-scroll">
            <table class="data-table">
                <thead>
                    <tr>
                        { for headers.iter().map(|key| html! { <th>{key.clone()}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for records.iter().map(build_row) }
                </tbody>
            </table>
        </div>
    }
}

fn build_row(record: &Record) -> Html {
    html! {
        <tr>
            {
                for record.values().map(|value| html! {
                    <td>{ render_tree(&display_tree(value), 0) }</td>
                })
            }
        </tr>
    }
}

/// Recursive cell renderer: a branch at nesting depth `d` becomes a
/// container indented by `d × 10` pixels with one line per entry, the key
/// emphasized; a leaf is emitted as bare text.
fn render_tree(node: &DisplayNode, depth: u32) -> Html {
    match node {
        DisplayNode::Leaf(text) => html! { <>{text.clone()}</> },
        DisplayNode::Branch(entries) => html! {
            <div style={format!("margin-left: {}px;", indent_px(depth))}>
                {
                    for entries.iter().map(|(key, child)| html! {
                        <div>
                            <strong>{key.clone()}{":"}</strong>
                            {" "}
                            { render_tree(child, depth + 1) }
                        </div>
                    })
                }
            </div>
        },
    }
}
