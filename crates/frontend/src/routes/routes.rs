use crate::domain::attendance::page::AttendancePage;
use crate::domain::banners::{form::PostBannerPage, list::BannerList};
use crate::domain::classes::{form::NewClassPage, list::ClassList};
use crate::domain::exam_routines::{form::NewExamRoutinePage, list::ExamRoutineList};
use crate::domain::exam_types::{form::NewExamTypePage, list::ExamTypeList};
use crate::domain::lessons::{form::NewLessonPage, list::LessonList};
use crate::domain::notices::{form::SendNoticePage, list::NoticeList};
use crate::domain::routines::{form::NewRoutinePage, list::RoutineList};
use crate::domain::sections::{form::NewSectionPage, list::SectionList};
use crate::domain::students::{form::NewStudentPage, list::StudentList, view::StudentView};
use crate::domain::teachers::{form::NewTeacherPage, list::TeacherList, view::TeacherView};
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

/// Everything except the login screen renders behind the auth guard,
/// inside the shared header/sidebar shell.
#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell>
                <Outlet />
            </Shell>
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/") view=LoginPage />
                <ParentRoute path=path!("") view=ProtectedShell>
                    <Route path=path!("dashboard") view=DashboardPage />
                    <Route path=path!("students") view=StudentList />
                    <Route path=path!("new-student") view=NewStudentPage />
                    <Route path=path!("view-student/:id") view=StudentView />
                    <Route path=path!("teachers") view=TeacherList />
                    <Route path=path!("new-teacher") view=NewTeacherPage />
                    <Route path=path!("view-teacher/:id") view=TeacherView />
                    <Route path=path!("classes") view=ClassList />
                    <Route path=path!("new-class") view=NewClassPage />
                    <Route path=path!("sections") view=SectionList />
                    <Route path=path!("new-section") view=NewSectionPage />
                    <Route path=path!("exam-types") view=ExamTypeList />
                    <Route path=path!("new-exam-type") view=NewExamTypePage />
                    <Route path=path!("routine") view=RoutineList />
                    <Route path=path!("new-routine") view=NewRoutinePage />
                    <Route path=path!("exam-routine") view=ExamRoutineList />
                    <Route path=path!("new-exam") view=NewExamRoutinePage />
                    <Route path=path!("lessons") view=LessonList />
                    <Route path=path!("new-lesson") view=NewLessonPage />
                    <Route path=path!("notices") view=NoticeList />
                    <Route path=path!("send-notice") view=SendNoticePage />
                    <Route path=path!("banners") view=BannerList />
                    <Route path=path!("post-banner") view=PostBannerPage />
                    <Route path=path!("attendance") view=AttendancePage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
