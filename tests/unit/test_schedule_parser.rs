use anyhow::Result;
use busyblocks::models::slot_duration;
use busyblocks::parsers::{parse_lines, parse_report, ScheduleParser};
use busyblocks::ScheduleError;
use chrono::NaiveDate;
use std::io::Write;
use tempfile::Builder;

const SAMPLE_REPORT: &str = "\
SALON SCHEDULING SYSTEM                          Appointment Listing            Page 1
Run Date: 01/14/24

Employee#: 42  Jane Doe                          Dept: HAIR        Station 3
Hours: 9:00a - 5:00p
Date     Time   Cust#  Customer Name        Vst  Service            Slots Seq  Flg  %Booked
-------- ------ ------ -------------------- ---- ------------------ ----- ---- ---
01/15/24 9:30a 1007 SMITH, JOHN 5 Haircut 2 0 X
(Prefers scissors only)
01/15/24  10:30a  1012  O'BRIEN-LEE, MARY  12  Color & Style  6  1  Y

01/15/24 2:15p 1044 VAN DYKE, ANN 1 Beard Trim 1 0 N
         ------------------------------------------------------------------------------
End of Employee Appointments

Employee#: 7  Bob Roe
Date     Time   Cust#  Customer Name        Vst  Service            Slots Seq  Flg  %Booked
01/16/24 12:00p 2001 LEE, ANN 3 Shave 3 0 X
End of Employee Appointments
";

fn jane_start() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

#[test]
fn test_single_appointment_scenario() -> Result<()> {
    let report = "\
Employee#: 42  Jane Doe
%Booked
01/15/24 9:30a 1007 SMITH, JOHN 5 Haircut 2 0 X
End of Employee Appointments
";
    let outcome = parse_report(report)?;
    assert_eq!(outcome.appointments.len(), 1);

    let appt = &outcome.appointments[0];
    assert_eq!(appt.employee_number, "42");
    assert_eq!(appt.employee_name, "Jane Doe");
    assert_eq!(appt.customer_number, "1007");
    assert_eq!(appt.client_name, "Smith, John");
    assert_eq!(appt.service, "Haircut");
    assert_eq!(appt.slots, 2);
    assert_eq!(appt.start, jane_start());
    assert_eq!(
        appt.end,
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    );
    assert_eq!(appt.date, "01/15/24");
    assert_eq!(appt.start_time, "09:30");
    assert_eq!(appt.end_time, "10:00");
    assert_eq!(
        appt.raw_line,
        "01/15/24 9:30a 1007 SMITH, JOHN 5 Haircut 2 0 X"
    );

    Ok(())
}

#[test]
fn test_sample_report() -> Result<()> {
    let outcome = parse_report(SAMPLE_REPORT)?;
    let appts = &outcome.appointments;

    assert_eq!(appts.len(), 4);
    assert_eq!(outcome.stats.blocks_seen, 2);

    assert_eq!(appts[1].client_name, "O'Brien-Lee, Mary");
    assert_eq!(appts[1].service, "Color & Style");
    assert_eq!(appts[1].slots, 6);
    assert_eq!(appts[1].end_time, "12:00");

    assert_eq!(appts[2].client_name, "Van Dyke, Ann");
    assert_eq!(appts[2].start_time, "14:15");
    assert_eq!(appts[2].end_time, "14:30");

    assert_eq!(appts[3].employee_number, "7");
    assert_eq!(appts[3].employee_name, "Bob Roe");
    assert_eq!(appts[3].start_time, "12:00");
    assert_eq!(appts[3].end_time, "12:45");

    Ok(())
}

#[test]
fn test_duration_matches_slots() -> Result<()> {
    let outcome = parse_report(SAMPLE_REPORT)?;
    assert!(!outcome.appointments.is_empty());

    for appt in &outcome.appointments {
        assert!(appt.end > appt.start);
        assert_eq!(appt.end - appt.start, slot_duration(appt.slots));
        assert!(appt.is_consistent());
    }

    Ok(())
}

#[test]
fn test_context_inheritance() -> Result<()> {
    let outcome = parse_report(SAMPLE_REPORT)?;
    let employees: Vec<&str> = outcome
        .appointments
        .iter()
        .map(|a| a.employee_number.as_str())
        .collect();
    assert_eq!(employees, vec!["42", "42", "42", "7"]);

    for appt in &outcome.appointments[..3] {
        assert_eq!(appt.employee_name, "Jane Doe");
    }

    Ok(())
}

#[test]
fn test_order_preserved() -> Result<()> {
    let outcome = parse_report(SAMPLE_REPORT)?;
    let customers: Vec<&str> = outcome
        .appointments
        .iter()
        .map(|a| a.customer_number.as_str())
        .collect();
    assert_eq!(customers, vec!["1007", "1012", "1044", "2001"]);

    Ok(())
}

#[test]
fn test_filler_lines_do_not_change_output() -> Result<()> {
    let base = vec![
        "Employee#: 42  Jane Doe",
        "%Booked",
        "01/15/24 9:30a 1007 SMITH, JOHN 5 Haircut 2 0 X",
        "01/15/24 10:00a 1008 BROWN, TIM 2 Shave 1 0 X",
        "End of Employee Appointments",
    ];
    let expected = parse_lines(&base)?.appointments;

    for filler in ["", "      ", "(see notes)", "   (continued)", "-------", "   -----   "] {
        let mut lines = base.clone();
        lines.insert(3, filler);
        let actual = parse_lines(&lines)?.appointments;
        assert_eq!(actual, expected, "filler {filler:?} changed the output");
    }

    Ok(())
}

#[test]
fn test_second_header_supersedes_first() -> Result<()> {
    let report = "\
Employee#: 42  Jane Doe
Employee#: 7  Bob Roe
%Booked
01/15/24 9:30a 1007 SMITH, JOHN 5 Haircut 2 0 X
";
    let outcome = parse_report(report)?;
    assert_eq!(outcome.appointments.len(), 1);
    assert_eq!(outcome.appointments[0].employee_number, "7");
    assert_eq!(outcome.appointments[0].employee_name, "Bob Roe");

    Ok(())
}

#[test]
fn test_header_mid_detail_requires_new_marker() -> Result<()> {
    let report = "\
Employee#: 42  Jane Doe
%Booked
01/15/24 9:30a 1007 SMITH, JOHN 5 Haircut 2 0 X
Employee#: 7  Bob Roe
01/15/24 10:00a 1008 BROWN, TIM 2 Shave 1 0 X
%Booked
01/15/24 11:00a 1009 GREEN, AL 2 Shave 1 0 X
";
    let outcome = parse_report(report)?;
    let customers: Vec<&str> = outcome
        .appointments
        .iter()
        .map(|a| a.customer_number.as_str())
        .collect();
    assert_eq!(customers, vec!["1007", "1009"]);
    assert_eq!(outcome.appointments[1].employee_number, "7");

    Ok(())
}

#[test]
fn test_non_conforming_row_skipped() -> Result<()> {
    let report = "\
Employee#: 42  Jane Doe
%Booked
01/15/24 9:30a 1007 SMITH, JOHN 5 Haircut 2
Subtotal for day: 4 slots
01/15/24 10:00a 1008 BROWN, TIM 2 Shave 1 0 X
End of Employee Appointments
";
    let outcome = parse_report(report)?;
    assert_eq!(outcome.appointments.len(), 1);
    assert_eq!(outcome.appointments[0].customer_number, "1008");
    assert_eq!(outcome.stats.unmatched_lines, 2);

    Ok(())
}

#[test]
fn test_rows_outside_blocks_ignored() -> Result<()> {
    let report = "\
01/15/24 9:30a 1007 SMITH, JOHN 5 Haircut 2 0 X
Employee#: 42  Jane Doe
%Booked
End of Employee Appointments
01/15/24 10:00a 1008 BROWN, TIM 2 Shave 1 0 X
";
    let outcome = parse_report(report)?;
    assert!(outcome.appointments.is_empty());
    assert_eq!(outcome.stats.unmatched_lines, 0);

    Ok(())
}

#[test]
fn test_rows_before_marker_ignored() -> Result<()> {
    let report = "\
Employee#: 42  Jane Doe
01/15/24 9:30a 1007 SMITH, JOHN 5 Haircut 2 0 X
End of Employee Appointments
";
    let outcome = parse_report(report)?;
    assert!(outcome.appointments.is_empty());

    Ok(())
}

#[test]
fn test_invalid_time_aborts_parse() {
    let report = "\
Employee#: 42  Jane Doe
%Booked
01/15/24 9:30a 1007 SMITH, JOHN 5 Haircut 2 0 X
01/15/24 13:30p 1008 BROWN, TIM 2 Shave 1 0 X
01/15/24 10:00a 1009 GREEN, AL 2 Shave 1 0 X
";
    let err = parse_report(report).unwrap_err();
    assert!(err.is_format_violation());
    match err {
        ScheduleError::InvalidTimestamp {
            line_number, line, ..
        } => {
            assert_eq!(line_number, 4);
            assert!(line.contains("13:30p"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_crlf_and_trailing_whitespace() -> Result<()> {
    let report = "Employee#: 42  Jane Doe   \r\n%Booked\r\n01/15/24 9:30a 1007 SMITH, JOHN 5 Haircut 2 0 X    \r\nEnd of Employee Appointments\r\n";
    let outcome = parse_report(report)?;
    assert_eq!(outcome.appointments.len(), 1);
    assert_eq!(outcome.appointments[0].employee_name, "Jane Doe");
    assert_eq!(
        outcome.appointments[0].raw_line,
        "01/15/24 9:30a 1007 SMITH, JOHN 5 Haircut 2 0 X"
    );

    Ok(())
}

#[test]
fn test_schedule_parser_reads_file() -> Result<()> {
    let mut temp_file = Builder::new().suffix(".LST").tempfile()?;
    temp_file.write_all(SAMPLE_REPORT.as_bytes())?;

    assert!(ScheduleParser::is_valid_file(temp_file.path()));

    let outcome = ScheduleParser::new(temp_file.path()).parse()?;
    assert_eq!(outcome.appointments.len(), 4);

    Ok(())
}

#[test]
fn test_schedule_parser_invalid_utf8_is_dropped() -> Result<()> {
    let mut temp_file = Builder::new().suffix(".LST").tempfile()?;
    temp_file.write_all(b"Employee#: 42  Jane\xff Doe\n%Booked\n")?;
    temp_file.write_all(b"01/15/24 9:30a 1007 SMITH, JOHN 5 Haircut 2 0 X\n")?;

    let outcome = ScheduleParser::new(temp_file.path()).parse()?;
    assert_eq!(outcome.appointments.len(), 1);
    assert_eq!(outcome.appointments[0].employee_name, "Jane Doe");

    Ok(())
}

#[test]
fn test_schedule_parser_missing_file() {
    let err = ScheduleParser::new("/definitely/not/here.LST")
        .parse()
        .unwrap_err();
    assert!(matches!(err, ScheduleError::ReportRead { .. }));
    assert!(!ScheduleParser::is_valid_file("/definitely/not/here.LST"));
}

#[test]
fn test_plain_text_is_not_valid_report() -> Result<()> {
    let mut temp_file = Builder::new().suffix(".txt").tempfile()?;
    temp_file.write_all(b"just some notes\nnothing to see\n")?;
    assert!(!ScheduleParser::is_valid_file(temp_file.path()));

    Ok(())
}
