//! Contact form.
//!
//! The form declares no `action` and no `method`: there is no backend to
//! receive it yet. Only client-side `required` checks apply.

use crate::content::{CONTACT_ANCHOR, CONTACT_FIELDS, CONTACT_HEADING, CONTACT_SUBMIT};
use crate::types::{ContactField, FieldKind};
use leptos::prelude::*;

/// Contact section with the three-field form.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=CONTACT_ANCHOR class="content-section" data-section="contact">
            <div class="container">
                <div class="row">
                    <div class="col-lg-8 mx-auto">
                        <h2 class="display-5 fw-bold text-center mb-5">{CONTACT_HEADING}</h2>
                        <form>
                            <div class="row g-3">
                                {CONTACT_FIELDS.iter().map(|field| view! {
                                    <FieldControl field=*field />
                                }).collect::<Vec<_>>()}
                                <div class="col-12 text-center">
                                    <button type="submit" class="btn btn-custom btn-lg">
                                        {CONTACT_SUBMIT}
                                    </button>
                                </div>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FieldControl(field: ContactField) -> impl IntoView {
    let control = match field.kind {
        FieldKind::TextArea { rows } => view! {
            <textarea
                name=field.name
                class="form-control form-control-lg"
                rows=rows.to_string()
                placeholder=field.placeholder
                required=true
            ></textarea>
        }
        .into_any(),
        FieldKind::Text | FieldKind::Email => {
            let input_type = if field.kind == FieldKind::Email { "email" } else { "text" };
            view! {
                <input
                    type=input_type
                    name=field.name
                    class="form-control form-control-lg"
                    placeholder=field.placeholder
                    required=true
                />
            }
            .into_any()
        }
    };

    view! {
        <div class=field.column_class()>
            {control}
        </div>
    }
}
