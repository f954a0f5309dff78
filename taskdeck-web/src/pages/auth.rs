use crate::routes::RouterNavigator;
use crate::services::use_services;
use crate::stores::{SessionState, SessionStore};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    Register,
}

/// Public entry page: sign in, or switch to the registration form.
#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let services = use_services();
    let (session, dispatch) = use_store::<SessionState>();
    let navigator = use_navigator();
    let mode = use_state(|| Mode::SignIn);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);

    let onsubmit = {
        let mode = *mode;
        let name_handle = name.clone();
        let email_handle = email.clone();
        let password_handle = password.clone();
        let loading_handle = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(navigator) = navigator.clone() else {
                log::error!("auth form submitted outside a router");
                return;
            };
            let name_value = (*name_handle).clone();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            let loading_ref = loading_handle.clone();
            loading_handle.set(true);
            let store =
                SessionStore::new(&services, Rc::new(RouterNavigator(navigator)), dispatch.clone());
            spawn_local(async move {
                match mode {
                    Mode::SignIn => store.sign_in(&email_value, &password_value).await,
                    Mode::Register => {
                        store
                            .register(&name_value, &email_value, &password_value)
                            .await;
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let bind = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let toggle = {
        let mode = mode.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            mode.set(match *mode {
                Mode::SignIn => Mode::Register,
                Mode::Register => Mode::SignIn,
            });
        })
    };

    let registering = *mode == Mode::Register;
    let is_busy = *loading;
    let disable_submit = email.is_empty()
        || password.is_empty()
        || (registering && name.is_empty())
        || is_busy;
    let (title, action, busy_label, switch_label) = if registering {
        ("Create account", "Register", "Registering...", "Already have an account? Sign in")
    } else {
        ("Sign in", "Sign in", "Signing in...", "No account yet? Register")
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{ title }</h2>
                    if let Some(errors) = &session.errors {
                        <div class="alert alert-error flex-col items-start">
                            { for errors.iter().map(|(field, message)| html! {
                                <span key={field.to_string()}>{ message.to_string() }</span>
                            })}
                        </div>
                    }
                    if registering {
                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">{"Name"}</span>
                            </label>
                            <input
                                id="name"
                                class="input input-bordered"
                                type="text"
                                required=true
                                value={(*name).clone()}
                                oninput={bind(&name)}
                            />
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={bind(&email)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={bind(&password)}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            { if is_busy { busy_label } else { action } }
                        </button>
                    </div>
                    <a class="link link-hover text-sm" href="#" onclick={toggle}>{ switch_label }</a>
                </form>
            </div>
        </div>
    }
}
