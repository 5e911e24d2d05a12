use crate::domain::{RouteTable, RouteTableError};
use crate::domain_model::RouteEntry;

pub const HOME_PATH: &str = "/manager/home";
pub const NOT_FOUND_PATH: &str = "/404";

/// The examination portal's route tree: back-office pages under `/manager`,
/// public pages under `/front`, plus the standalone auth and not-found pages.
pub fn portal_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::redirect("/", HOME_PATH),
        RouteEntry::section("/manager", "Manager", manager_routes()),
        RouteEntry::section("/front", "Front", front_routes()),
        RouteEntry::view("/login", "Login"),
        RouteEntry::view("/register", "Register"),
        RouteEntry::view(NOT_FOUND_PATH, "404"),
        RouteEntry::catch_all(NOT_FOUND_PATH),
    ]
}

pub fn portal_table() -> Result<RouteTable, RouteTableError> {
    RouteTable::try_new(portal_routes())
}

fn manager_routes() -> Vec<RouteEntry> {
    [
        ("home", "系统首页", "Home"),
        ("admin", "管理员信息", "Admin"),
        ("notice", "系统公告", "Notice"),
        ("person", "个人资料", "Person"),
        ("password", "修改密码", "Password"),
        ("examinationType", "普通体检类型", "ExaminationType"),
        ("doctor", "医生信息管理", "Doctor"),
        ("office", "医生科室信息", "Office"),
        ("title", "医生职称信息", "Title"),
        ("user", "用户个人信息", "User"),
        ("information", "健康科普信息", "Information"),
        ("userInformation", "健康科普", "UserInformation"),
        ("informationDetail", "健康科普详细", "InformationDetail"),
        ("physicalExamination", "体检项目", "PhysicalExamination"),
        ("userPhysicalExamination", "用户预约体检", "UserPhysicalExamination"),
        ("examinationOrder", "体检预约订单", "ExaminationOrder"),
        ("examinationPackage", "体检套餐预约", "ExaminationPackage"),
        ("userExaminationPackage", "体检套餐预约", "UserExaminationPackage"),
        ("feedback", "反馈和建议", "Feedback"),
        ("userFeedback", "用户端反馈和建议", "UserFeedback"),
        ("calendar", "日程安排", "Calendar"),
        ("brief", "平台简介", "Brief"),
        ("dataAnalysis", "数据", "DataAnalysis"),
        ("medicalLiterature", "医疗文献管理", "MedicalLiterature"),
        ("doctorLiterature", "医疗文献阅读", "DoctorLiterature"),
        ("crawlerManagement", "爬虫管理中心", "CrawlerManagement"),
        ("aiConsultation", "AI健康咨询", "AiConsultation"),
    ]
    .into_iter()
    .map(|(path, name, view)| RouteEntry::view(path, format!("manager/{view}")).named(name))
    .collect()
}

fn front_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::view("home", "front/Home"),
        RouteEntry::view("person", "front/Person"),
        RouteEntry::view("literature", "front/MedicalLiterature").named("医疗文献"),
        RouteEntry::view("ai-consultation", "manager/AiConsultation").named("AI健康咨询"),
    ]
}
