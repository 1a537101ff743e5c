pub mod timetable_handler;
