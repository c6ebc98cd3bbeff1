//! Shared build-file fixtures.

#![allow(dead_code)]

pub const EXECUTABLE: &str = r"cmake_minimum_required(VERSION 3.10)
# --== proj begin project-name ==--
project(demo)
# --== proj end project-name ==--
# --== proj begin type-executable ==--
# --== proj end type-executable ==--

# --== proj begin executable-name ==--
set(PROJ_EXECUTABLE_NAME demo_app)
# --== proj end executable-name ==--

# --== proj begin sources ==--
a.cpp
# --== proj end sources ==--
# --== proj begin headers ==--
# --== proj end headers ==--

add_executable(${PROJ_EXECUTABLE_NAME} ${PROJ_SOURCES} ${PROJ_HEADERS})

# --== proj begin definitions ==--
# --== proj end definitions ==--
# --== proj begin subdirs ==--
# --== proj end subdirs ==--
# --== proj begin link-libraries ==--
# --== proj end link-libraries ==--
";

pub const LIBRARY: &str = r"# --== proj begin project-name ==--
project(widgets LANGUAGES CXX)
# --== proj end project-name ==--
# --== proj begin type-library ==--
# --== proj end type-library ==--
# --== proj begin library-name ==--
set(PROJ_LIBRARY_NAME widgets)
# --== proj end library-name ==--
# --== proj begin sources ==--
# --== proj end sources ==--
# --== proj begin headers ==--
# --== proj end headers ==--
# --== proj begin library-exports ==--
# --== proj end library-exports ==--
# --== proj begin definitions ==--
# --== proj end definitions ==--
# --== proj begin link-libraries ==--
# --== proj end link-libraries ==--
";

pub const ROOT_PROJECT: &str = r"cmake_minimum_required(VERSION 3.10)
# --== proj begin project-name ==--
project(everything)
# --== proj end project-name ==--
# --== proj begin type-rootproject ==--
# --== proj end type-rootproject ==--
# --== proj begin subdirs ==--
add_subdirectory(lib)
# --== proj end subdirs ==--
";
