use contracts::auth::AdminInfo;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub admin: Option<AdminInfo>,
    pub token: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.admin.is_some() && self.token.is_some()
    }
}

/// Auth context provider component. Restores the persisted session on
/// mount; there is no token validation round-trip, presence is enough.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let initial = SessionState {
        admin: storage::get_admin(),
        token: storage::get_token(),
    };
    let (session, set_session) = signal(initial);

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session state.
pub fn use_auth() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session =
        use_context::<ReadSignal<SessionState>>().expect("AuthProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("AuthProvider not found in component tree");
    (session, set_session)
}

/// The signed-in admin, for screens that stamp `createdBy` on submissions.
pub fn current_admin() -> Option<AdminInfo> {
    let (session, _) = use_auth();
    session.get_untracked().admin
}

/// Persist and publish a fresh session after login.
pub fn establish_session(set_session: WriteSignal<SessionState>, admin: AdminInfo, token: String) {
    storage::save_session(&admin, &token);
    set_session.set(SessionState {
        admin: Some(admin),
        token: Some(token),
    });
}

/// Clear storage and state on logout.
pub fn end_session(set_session: WriteSignal<SessionState>) {
    storage::clear_session();
    set_session.set(SessionState::default());
}
