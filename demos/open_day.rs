//! Open Day Tour
//!
//! Walks the sample campus scenario end to end:
//! - Construct a graduate student and a full professor
//! - Render both layered summaries
//! - Compute both payments through the role dispatch
//! - Trigger an enrollment violation, catch it, and keep going
//!
//! Violations raised along the way are appended to the audit log file.
//!
//! Run with: cargo run --example open_day

use chrono::NaiveDate;
use registrar::campus::{Course, Department, University};
use registrar::people::{
    GraduateProfile, Identity, Person, ProfessorProfile, Rank, StudentProfile,
};
use registrar::validation::{Auditor, Violation};
use rust_decimal::Decimal;

fn main() -> Result<(), Violation> {
    println!("=== Open Day Tour ===\n");

    let auditor = Auditor::default_file();
    let mut university = University::new(auditor.clone());

    let mut grad = Person::graduate(
        Identity::new("Manjeet", 19, "GS001", "9876543210"),
        StudentProfile {
            enrollment_date: NaiveDate::from_ymd_opt(2021, 8, 15).expect("valid date"),
            program: "CS".into(),
            gpa: 3.9,
        },
        GraduateProfile {
            research_topic: "AI".into(),
            advisor: "Dr. Krish".into(),
            thesis_title: "AI Optimization".into(),
        },
        &auditor,
    )?;
    if let Some(graduate) = grad.as_graduate_mut() {
        graduate.add_teaching_hours(10);
        graduate.add_research_hours(15);
    }

    let prof = Person::professor(
        Identity::new("Mrs Richa Singh", 40, "P001", "9123456789"),
        ProfessorProfile {
            department: "CS".into(),
            specialization: "AI".into(),
            hire_date: NaiveDate::from_ymd_opt(2010, 5, 1).expect("valid date"),
            years_of_service: 15,
            base_salary: Decimal::from(6000),
            research_grants: Decimal::from(10000),
        },
        Rank::Full,
        &auditor,
    )?;

    println!("{}", grad.display_details());
    println!("Grad Payment: ${}\n", grad.calculate_payment(&auditor)?);

    println!("{}", prof.display_details());
    println!("Prof Payment: ${}\n", prof.calculate_payment(&auditor)?);

    let mut department = Department::new("CS");
    department.add_professor(prof.id());
    university.add_department(department);
    university.admit(prof);
    university.admit(grad);
    university.add_course(Course::new("CS101", "P001"));

    // Enrolling with no course at all: caught and reported, not fatal.
    match university.enroll("GS001", None) {
        Ok(()) => println!("Enrollment succeeded unexpectedly"),
        Err(violation) => println!("Caught violation: {violation}"),
    }

    university.enroll("GS001", Some("CS101"))?;
    let courses = university
        .person("GS001")
        .and_then(Person::as_student)
        .map(|student| student.courses().join(", "))
        .unwrap_or_default();
    println!("GS001 is now enrolled in: {courses}");

    println!("\n=== Tour Complete ===");
    Ok(())
}
