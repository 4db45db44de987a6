//! Batch script generation for Windows Task Scheduler registration.
//!
//! The emitted document is consumed verbatim by operators running it on the
//! target machine; its shape (banners, Korean prompts, task naming) must stay
//! stable across releases.

use chrono::{Datelike, NaiveDate};

use crate::models::selection::MAX_DATES;
use crate::utils::date::{format_iso, format_korean_long};

/// Scheduled task name for one reservation date: `ReservationMacro_YYYY_MM_DD`.
pub fn task_name(date: NaiveDate) -> String {
    format!("ReservationMacro_{}", format_iso(date).replace('-', "_"))
}

/// Download filename for the script of `target_month`,
/// e.g. `reservation_scheduler_2024_05.bat`.
pub fn script_file_name(target_month: NaiveDate) -> String {
    format!(
        "reservation_scheduler_{}_{:02}.bat",
        target_month.year(),
        target_month.month()
    )
}

/// Generate the full batch document for exactly [`MAX_DATES`] dates.
///
/// Returns `None` for any other count. The UI keeps the generate action
/// disabled below capacity, so this is a guard rather than an error path.
/// Dates are sorted ascending; input order does not matter.
pub fn generate_batch_file(dates: &[NaiveDate], executable_path: &str) -> Option<String> {
    if dates.len() != MAX_DATES {
        return None;
    }

    let mut sorted = dates.to_vec();
    sorted.sort();

    let date_list = sorted
        .iter()
        .enumerate()
        .map(|(index, date)| format!("echo {}. {}", index + 1, format_korean_long(*date)))
        .collect::<Vec<_>>()
        .join("\n");

    let task_blocks = sorted
        .iter()
        .enumerate()
        .map(|(index, date)| registration_block(index + 1, *date, executable_path))
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!(
        "@echo off
chcp 65001
echo ==========================================
echo 주차 예약 시스템 - 스케줄러 등록
echo ==========================================
echo.
echo 다음 날짜에 대한 스케줄러를 등록합니다:
{date_list}
echo.
echo 관리자 권한이 필요합니다. 계속하시겠습니까?
pause
echo.
echo 스케줄러 등록 중...
echo.
{task_blocks}
echo.
echo ==========================================
echo 완료! 등록된 작업을 확인하려면:
echo schtasks /query /tn \"ReservationMacro_*\"
echo ==========================================
pause"
    ))
}

/// One `schtasks /create` block with its success/failure branch. The leading
/// newline keeps a blank separator line between blocks once joined.
fn registration_block(ordinal: usize, date: NaiveDate, executable_path: &str) -> String {
    let korean = format_korean_long(date);
    format!(
        "
REM 작업 {ordinal}: {korean}
schtasks /create /tn \"{task}\" /tr \"{executable_path}\" /sc once /sd {iso} /st 00:01 /ru SYSTEM /f
if %errorlevel% neq 0 (
    echo 작업 {ordinal} 생성 실패: {korean}
) else (
    echo 작업 {ordinal} 생성 성공: {korean}
)",
        task = task_name(date),
        iso = format_iso(date),
    )
}
