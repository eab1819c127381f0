//! Console shell: runs the launch flow against the configured server and
//! prints what the screens would display.

use std::time::Duration;
use subject_guide_lib::data::Specialty;
use subject_guide_lib::frame::CommonPresenter;
use subject_guide_lib::logging::init_logging;
use subject_guide_lib::screens::{Destination, GuideEvent, GuideView, Navigator, SubjectEvent, SubjectView};
use subject_guide_lib::{App, AppConfig};
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tracing::{info, warn};

const SUBJECT_WAIT: Duration = Duration::from_secs(20);

struct ConsoleGuideView;

impl GuideView for ConsoleGuideView {
    fn set_fullscreen(&mut self) {}

    fn real_size(&self) -> (u32, u32) {
        (1080, 1920)
    }

    fn load_advert(&mut self, url: &str) {
        println!("[advert] {}", url);
    }

    fn show_time_view(&mut self) {}

    fn set_time_text(&mut self, text: &str) {
        println!("[skip {}]", text);
    }

    fn show_error(&mut self, message: &str) {
        println!("[error] {}", message);
    }
}

enum ListSignal {
    Shown(usize),
    Failed,
}

struct ConsoleSubjectView {
    signals: UnboundedSender<ListSignal>,
}

impl SubjectView for ConsoleSubjectView {
    fn set_title(&mut self, title: &str) {
        println!("== {} ==", title);
    }

    fn show_subjects(&mut self, items: &[Specialty]) {
        for (i, item) in items.iter().enumerate() {
            println!("  {}. {}", i + 1, item.specialty_name);
        }
        let _ = self.signals.send(ListSignal::Shown(items.len()));
    }

    fn show_error(&mut self, message: &str) {
        println!("[error] {}", message);
        let _ = self.signals.send(ListSignal::Failed);
    }
}

struct ConsoleNavigator(&'static str);

impl Navigator for ConsoleNavigator {
    fn start(&mut self, destination: Destination) {
        info!("{}: open {:?}", self.0, destination);
    }

    fn finish(&mut self) {
        info!("{}: finish", self.0);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_logging(config.log_level());

    let app = App::new(config)?;

    let guide = app.guide_screen(ConsoleGuideView, ConsoleNavigator("guide"));
    let guide_main = guide.main_thread();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            guide_main.post(GuideEvent::Destroy);
        }
    });

    match guide.run().await {
        Some(Destination::Subject) => pick_subject(&app).await?,
        Some(other) => info!("launch finished at {:?}", other),
        None => info!("launch cancelled"),
    }
    Ok(())
}

/// Show the subject list, pick the first entry and go back.
async fn pick_subject(app: &App) -> anyhow::Result<()> {
    let (signals, mut shown) = unbounded_channel();
    let screen = app.subject_screen(ConsoleSubjectView { signals }, ConsoleNavigator("subject"));
    let main = screen.main_thread();
    let running = tokio::spawn(screen.run());

    loop {
        match tokio::time::timeout(SUBJECT_WAIT, shown.recv()).await {
            Ok(Some(ListSignal::Shown(0))) => continue,
            Ok(Some(ListSignal::Shown(_))) => {
                main.post(SubjectEvent::ItemClick(0));
                break;
            }
            Ok(Some(ListSignal::Failed)) | Ok(None) => break,
            Err(_) => {
                warn!("no subjects after {:?}", SUBJECT_WAIT);
                break;
            }
        }
    }
    main.post(SubjectEvent::Back);

    match running.await? {
        Some(selected) => info!(
            "selected {} ({}), next stop: {:?}",
            selected.specialty_name,
            selected.specialty_id,
            subject_guide_lib::screens::route(Some(&selected), app.session().is_login())
        ),
        None => info!("no subject selected"),
    }
    Ok(())
}
