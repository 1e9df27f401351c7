// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 模糊测试模块
//!
//! 随机输入驱动的加解密与编码测试。
