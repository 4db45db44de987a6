// Reservation Scheduler
// Main entry point

use reservation_scheduler::ui::ReservationApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Reservation Scheduler");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "주차 예약 스케줄러",
        options,
        Box::new(|cc| Ok(Box::new(ReservationApp::new(cc)))),
    )
}
