//! Seed job configurations
//!
//! Each job is a thin declaration over the generic pipeline: the identifying
//! key plus the target field set in output order. Field lists mirror what the
//! portal backend accepts for each record type; nothing outside a job's list
//! ever reaches the API.

use crate::pipeline::{FieldSpec, SeedJob};

/// Stock avatar used when the input carries no profile image
pub const DEFAULT_PROFILE_IMAGE: &str =
    "https://static.vecteezy.com/system/resources/previews/005/129/844/non_2x/profile-user-icon-isolated-on-white-background-eps10-free-vector.jpg";

fn identity(fields: &[&str]) -> Vec<FieldSpec> {
    fields.iter().map(|f| FieldSpec::column(*f)).collect()
}

/// Teacher accounts imported from the campus CSV export.
///
/// Qualification and expertise are collected later, so they go out as
/// placeholders; experience and scholar ids get fixed starter values.
pub fn teachers() -> SeedJob {
    SeedJob {
        name: "teachers",
        key_field: "empId",
        specs: vec![
            FieldSpec::column("empId"),
            FieldSpec::column("name"),
            FieldSpec::column("password"),
            FieldSpec::constant("campus", "EC"),
            FieldSpec::placeholder("qualification"),
            FieldSpec::placeholder("expertise"),
            FieldSpec::column("panNo"),
            FieldSpec::column("phno").text(),
            FieldSpec::column("designation"),
            FieldSpec::column("dept"),
            FieldSpec::column("dateofJoining").day_first_date(),
            FieldSpec::constant("totalExpBfrJoin", "5"),
            FieldSpec::constant("googleScholarId", "0001"),
            FieldSpec::constant("sId", "0001"),
            FieldSpec::constant("oId", "0001"),
            FieldSpec::column("profileImg").or(DEFAULT_PROFILE_IMAGE),
        ],
    }
}

/// Default user accounts imported from the HR workbook. Unlike the teacher
/// import this sheet already carries qualification, expertise, role and
/// access data; only the department is pinned.
pub fn users() -> SeedJob {
    SeedJob {
        name: "users",
        key_field: "empId",
        specs: vec![
            FieldSpec::column("empId"),
            FieldSpec::column("name"),
            FieldSpec::column("password"),
            FieldSpec::column("campus"),
            FieldSpec::column("qualification"),
            FieldSpec::column("expertise"),
            FieldSpec::column("panNo"),
            FieldSpec::column("phno").text(),
            FieldSpec::column("designation"),
            FieldSpec::constant("dept", "Computer Science and Engineering"),
            FieldSpec::column("dateofJoining"),
            FieldSpec::column("totalExpBfrJoin"),
            FieldSpec::column("googleScholarId"),
            FieldSpec::column("role"),
            FieldSpec::column("accessTo"),
            FieldSpec::column("sId"),
            FieldSpec::column("oId"),
            FieldSpec::column("profileImg").or(DEFAULT_PROFILE_IMAGE),
            FieldSpec::placeholder("centre_name"),
        ],
    }
}

/// Faculty patents (built-in dataset)
pub fn patents() -> SeedJob {
    SeedJob {
        name: "patents",
        key_field: "name",
        specs: identity(&[
            "name",
            "teacherIds",
            "patentNumber",
            "patentTitle",
            "year",
            "documentLink",
        ]),
    }
}

/// Student entrance exam qualifications (built-in dataset)
pub fn entrance_exams() -> SeedJob {
    SeedJob {
        name: "student entrance exams",
        key_field: "registrationNumber",
        specs: identity(&[
            "year",
            "registrationNumber",
            "studentName",
            "isNET",
            "isSLET",
            "isGATE",
            "isGMAT",
            "isCAT",
            "isGRE",
            "isJAM",
            "isIELTS",
            "isTOEFL",
            "documentLink",
        ]),
    }
}

/// Student higher-studies admissions (built-in dataset)
pub fn higher_studies() -> SeedJob {
    SeedJob {
        name: "student higher studies",
        key_field: "studentName",
        specs: identity(&[
            "studentName",
            "programGraduatedFrom",
            "institutionAdmittedTo",
            "programmeAdmittedTo",
            "documentLink",
            "year",
        ]),
    }
}

fn sports_specs() -> Vec<FieldSpec> {
    identity(&[
        "nameOfStudent",
        "nameOfEvent",
        "link",
        "yearOfEvent",
        "teamOrIndi",
        "level",
        "nameOfAward",
        "nameOfUniv",
    ])
}

/// Inter-university sports results (built-in dataset)
pub fn inter_sports() -> SeedJob {
    SeedJob {
        name: "student inter-university sports",
        key_field: "nameOfStudent",
        specs: sports_specs(),
    }
}

/// Intra-university sports results (built-in dataset)
pub fn intra_sports() -> SeedJob {
    SeedJob {
        name: "student intra-university sports",
        key_field: "nameOfStudent",
        specs: sports_specs(),
    }
}

/// Department activities attended elsewhere (built-in dataset)
pub fn attended_activities() -> SeedJob {
    SeedJob {
        name: "department attended activities",
        key_field: "name",
        specs: identity(&[
            "name",
            "programTitle",
            "durationStartDate",
            "durationEndDate",
            "documentLink",
            "year",
        ]),
    }
}

/// Department-conducted programs (built-in dataset)
pub fn conducted_activities() -> SeedJob {
    SeedJob {
        name: "department conducted activities",
        key_field: "name",
        specs: identity(&[
            "name",
            "nameOfProgram",
            "noOfParticipants",
            "durationStartDate",
            "durationEndDate",
            "documentLink",
            "year",
        ]),
    }
}
