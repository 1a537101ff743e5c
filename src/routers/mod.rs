pub mod all_routers;
pub mod timetable_router;
